use std::convert::TryFrom;
use std::fmt;

/// Struct to package the client identity with name and realm.
#[derive(Clone, Debug, PartialEq)]
pub struct KrbUser {
    pub realm: String,
    pub name: String,
}

impl KrbUser {
    pub fn new(name: String, realm: String) -> Self {
        return Self { name, realm };
    }
}

impl fmt::Display for KrbUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.realm)
    }
}

impl TryFrom<&str> for KrbUser {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parts: Vec<&str> =
            value.split(|c| ['/', '\\'].contains(&c)).collect();

        if parts.len() != 2 || parts[0].len() == 0 || parts[1].len() == 0 {
            return Err(format!(
                "Invalid user '{}', it must be <realm>/<username>",
                value
            ));
        }

        return Ok(KrbUser::new(parts[1].to_string(), parts[0].to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_parses_from_realm_and_name() {
        let user = KrbUser::try_from("CORP.COM/alice").unwrap();
        assert_eq!("alice", user.name);
        assert_eq!("CORP.COM", user.realm);
        assert_eq!("alice@CORP.COM", user.to_string());
    }

    #[test]
    fn user_requires_both_parts() {
        assert!(KrbUser::try_from("alice").is_err());
        assert!(KrbUser::try_from("CORP.COM/").is_err());
        assert!(KrbUser::try_from("/alice").is_err());
    }
}
