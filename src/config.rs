//! Client-side realm configuration: referral policy and the capath
//! hierarchy used to traverse between realms when referrals are not
//! available.

use std::collections::HashMap;

pub const DEFAULT_MAX_REFERRALS: u32 = 5;

/// In capath entries, a `.` marks a direct trust with no intermediate
/// realm.
const DIRECT_PATH: &str = ".";

#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to try RFC 6806 referrals before the capath scheme.
    pub referrals_enabled: bool,

    /// Maximum number of referrals followed in one chain.
    pub max_referrals: u32,

    capaths: HashMap<String, HashMap<String, Vec<String>>>,
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            referrals_enabled: true,
            max_referrals: DEFAULT_MAX_REFERRALS,
            capaths: HashMap::new(),
        };
    }
}

impl Config {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Registers the intermediate realms to cross from `from` to `to`,
    /// as in the `[capaths]` section of krb5.conf. Use `"."` as the
    /// single intermediate to declare a direct trust.
    pub fn add_capath(
        &mut self,
        from: &str,
        to: &str,
        intermediates: Vec<String>,
    ) {
        self.capaths
            .entry(from.to_string())
            .or_insert_with(HashMap::new)
            .insert(to.to_string(), intermediates);
    }

    /// Ordered list of realms to traverse from `from` to `to`, both
    /// endpoints included. Without a capath entry the realms are
    /// assumed to trust each other directly.
    pub fn realms_list(&self, from: &str, to: &str) -> Vec<String> {
        if from == to {
            return vec![from.to_string()];
        }

        let mut realms = vec![from.to_string()];
        if let Some(destinations) = self.capaths.get(from) {
            if let Some(intermediates) = destinations.get(to) {
                for realm in intermediates {
                    if realm != DIRECT_PATH {
                        realms.push(realm.clone());
                    }
                }
            }
        }
        realms.push(to.to_string());

        return realms;
    }
}
