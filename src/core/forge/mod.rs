//! This module provides functionalities to create kerberos structs

mod kdc_req;
pub use kdc_req::KdcReqBuilder;

mod krb_cred;
pub use krb_cred::new_krb_cred_info;

mod krb_user;
pub use krb_user::KrbUser;

mod principal_name;
pub use principal_name::{
    new_nt_principal, new_nt_srv_hst, new_nt_srv_inst, new_principal_name,
    spn_to_service_parts, ServiceRef, TGS_SERVICE_NAME,
};

mod pa_data;
pub use pa_data::{new_pa_data_ap_req, new_pa_data_pa_for_user};

mod build_req;
pub use build_req::build_tgs_req;

mod decrypters;
pub use decrypters::extract_ticket_from_tgs_rep;
