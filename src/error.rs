use kerberos_constants::error_codes;
use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    String(String),

    /// Error reply (KRB-ERROR) returned by the KDC.
    KdcError { code: i32 },

    /// Errors due to IO, such as network failures or cancellation.
    IOError(String, io::Error),

    /// Errors related to handling of raw data, such as parsing or
    /// decrypting KDC responses.
    DataError(String),

    /// The realm hierarchy was exhausted without reaching a TGT for the
    /// service realm.
    NoServiceCreds,

    /// The KDC referred the client to a realm already visited in the
    /// same chain.
    ReferralLoop,

    /// S4U2self impersonation of a client from another realm.
    UnsupportedCrossRealm,

    /// A ticket flag or argument required by the operation is missing.
    Precondition(String),

    /// The KDC replied successfully but the reply does not honor the
    /// request.
    KdcRefused(String),
}

impl Error {
    /// True for KDC error replies, the only kind the orchestrator
    /// recovers from by retrying without canonicalization.
    pub fn is_kdc_error(&self) -> bool {
        if let Error::KdcError { .. } = self {
            return true;
        }
        return false;
    }

    pub fn is_data_error(&self) -> bool {
        if let Error::DataError(_) = self {
            return true;
        }
        return false;
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::String(s) => write!(f, "{}", s),
            Error::DataError(s) => write!(f, "{}", s),
            Error::KdcError { code } => {
                write!(f, "{}", create_krb_error_msg(*code))
            }
            Error::IOError(desc, io_error) => {
                write!(f, "{}: {}", desc, io_error)
            }
            Error::NoServiceCreds => write!(f, "No service creds"),
            Error::ReferralLoop => write!(f, "Referrals loop detected"),
            Error::UnsupportedCrossRealm => {
                write!(f, "Cross realm impersonation not supported")
            }
            Error::Precondition(s) => write!(f, "{}", s),
            Error::KdcRefused(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        return Self::String(error);
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        return Self::String(error.to_string());
    }
}

impl From<kerberos_asn1::KrbError> for Error {
    fn from(error: kerberos_asn1::KrbError) -> Self {
        return Self::KdcError {
            code: error.error_code,
        };
    }
}

impl From<(&str, io::Error)> for Error {
    fn from(error: (&str, io::Error)) -> Self {
        return Self::IOError(error.0.into(), error.1);
    }
}

fn create_krb_error_msg(error_code: i32) -> String {
    let error_string = error_codes::error_code_to_string(error_code);
    return format!("Error {}: {}", error_code, error_string);
}
