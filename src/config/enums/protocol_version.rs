use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolVersion {
    sslv2,
    sslv3,
    tlsv1,
    tlsv1_1,
    tlsv1_2,
    tlsv1_3,
}
