use log::debug;

/// Events emitted while an acquisition walks realms and referrals.
/// They describe the traversal only and never carry key material.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A realm was asked for a cross-realm TGT during a capath walk.
    ProbeAttempt { from: String, to: String },

    /// The KDC answered with a referral TGT towards another realm.
    ReferralObserved { realm: String },

    /// Some hop withdrew the ok-as-delegate property of the chain.
    DelegateFlagCleared { at: String },
}

/// Observer of the acquisition traversal.
pub trait TraceSink {
    fn record(&self, event: TraceEvent);
}

/// Sink that forwards events to the log facade.
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&self, event: TraceEvent) {
        match event {
            TraceEvent::ProbeAttempt { from, to } => {
                debug!("asking {} for a TGT towards {}", from, to);
            }
            TraceEvent::ReferralObserved { realm } => {
                debug!("referral TGT for {}", realm);
            }
            TraceEvent::DelegateFlagCleared { at } => {
                debug!("ok-as-delegate turned off at {}", at);
            }
        }
    }
}
