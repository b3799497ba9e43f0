// libport100/src/protocol/commands/protocol_params.rs
//! InSetProtocol parameters.

/// InSetProtocol parameter set.
///
/// Every field is an 8-bit register value keyed by a fixed parameter
/// number. Unset fields are left out of the encoded argument list; set
/// fields are emitted as `(key, value)` pairs in ascending key order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtocolParameters {
    /// Key 0x00.
    pub initial_guard_time: Option<u8>,
    /// Key 0x01.
    pub add_crc: Option<u8>,
    /// Key 0x02.
    pub check_crc: Option<u8>,
    /// Key 0x03.
    pub multi_card: Option<u8>,
    /// Key 0x04.
    pub add_parity: Option<u8>,
    /// Key 0x05.
    pub check_parity: Option<u8>,
    /// Key 0x06.
    pub bitwise_anticoll: Option<u8>,
    /// Key 0x07.
    pub last_byte_bit_count: Option<u8>,
    /// Key 0x08.
    pub mifare_crypto: Option<u8>,
    /// Key 0x09.
    pub add_sof: Option<u8>,
    /// Key 0x0a.
    pub check_sof: Option<u8>,
    /// Key 0x0b.
    pub add_eof: Option<u8>,
    /// Key 0x0c.
    pub check_eof: Option<u8>,
    /// Key 0x0e.
    pub deaf_time: Option<u8>,
    /// Key 0x0f.
    pub continuous_receive_mode: Option<u8>,
    /// Key 0x10.
    pub min_len_for_crm: Option<u8>,
    /// Key 0x11.
    pub type_1_tag_rrdd: Option<u8>,
    /// Key 0x12.
    pub rfca: Option<u8>,
    /// Key 0x13.
    pub guard_time: Option<u8>,
}

macro_rules! setters {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Set `", stringify!($name), "`.")]
            pub fn $name(mut self, value: u8) -> Self {
                self.$name = Some(value);
                self
            }
        )*
    };
}

impl ProtocolParameters {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chipset power-on profile.
    pub fn defaults() -> Self {
        Self::new()
            .initial_guard_time(24)
            .add_crc(1)
            .check_crc(1)
            .multi_card(0)
            .add_parity(0)
            .check_parity(0)
            .bitwise_anticoll(0)
            .last_byte_bit_count(8)
            .mifare_crypto(0)
            .add_sof(0)
            .check_sof(0)
            .add_eof(0)
            .check_eof(0)
            .deaf_time(4)
            .continuous_receive_mode(0)
            .min_len_for_crm(0)
            .type_1_tag_rrdd(0)
            .rfca(0)
            .guard_time(6)
    }

    setters!(
        initial_guard_time,
        add_crc,
        check_crc,
        multi_card,
        add_parity,
        check_parity,
        bitwise_anticoll,
        last_byte_bit_count,
        mifare_crypto,
        add_sof,
        check_sof,
        add_eof,
        check_eof,
        deaf_time,
        continuous_receive_mode,
        min_len_for_crm,
        type_1_tag_rrdd,
        rfca,
        guard_time,
    );

    // Key 0x0d is reserved.
    fn entries(&self) -> [(u8, Option<u8>); 19] {
        [
            (0x00, self.initial_guard_time),
            (0x01, self.add_crc),
            (0x02, self.check_crc),
            (0x03, self.multi_card),
            (0x04, self.add_parity),
            (0x05, self.check_parity),
            (0x06, self.bitwise_anticoll),
            (0x07, self.last_byte_bit_count),
            (0x08, self.mifare_crypto),
            (0x09, self.add_sof),
            (0x0a, self.check_sof),
            (0x0b, self.add_eof),
            (0x0c, self.check_eof),
            (0x0e, self.deaf_time),
            (0x0f, self.continuous_receive_mode),
            (0x10, self.min_len_for_crm),
            (0x11, self.type_1_tag_rrdd),
            (0x12, self.rfca),
            (0x13, self.guard_time),
        ]
    }

    /// Serialize as ascending `(key, value)` pairs.
    pub fn encode(&self) -> Vec<u8> {
        self.entries()
            .iter()
            .filter_map(|&(key, value)| value.map(|v| [key, v]))
            .flatten()
            .collect()
    }
}
