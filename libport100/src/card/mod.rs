// libport100/src/card/mod.rs
//! Cards found by Type F sensing.

use crate::types::{Idm, Pmm, SystemCode};

/// A Type F card found by sensing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    idm: Idm,
    pmm: Pmm,
    system_code: Option<SystemCode>,
    sensf_res: Vec<u8>,
}

impl Card {
    /// Build a card from its SENSF_RES fields.
    pub fn new(idm: Idm, pmm: Pmm, system_code: Option<SystemCode>, sensf_res: Vec<u8>) -> Self {
        Self {
            idm,
            pmm,
            system_code,
            sensf_res,
        }
    }

    /// Manufacture ID.
    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    /// Manufacture parameter.
    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }

    /// Present when the card answered a system-code request.
    pub fn system_code(&self) -> Option<SystemCode> {
        self.system_code
    }

    /// The SENSF_RES as received, starting at the response code.
    pub fn sensf_res(&self) -> &[u8] {
        &self.sensf_res
    }
}
