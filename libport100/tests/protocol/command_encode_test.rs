#[path = "../common/mod.rs"]
mod common;

use libport100::protocol::codec::encode_command_frame;
use libport100::protocol::{BitrateProfile, Command, CommandCode, ProtocolParameters};

#[test]
fn open_handshake_commands() {
    assert_eq!(
        encode_command_frame(&Command::SetCommandType(1)).unwrap(),
        common::fixtures::set_command_type_request()
    );
    assert_eq!(
        encode_command_frame(&Command::SwitchRf(false)).unwrap(),
        common::fixtures::switch_rf_off_request()
    );
}

#[test]
fn sense_commands() {
    let rf = Command::InSetRf {
        send: BitrateProfile::F424,
        recv: BitrateProfile::F424,
    };
    assert_eq!(rf.encode(), vec![0xd6, 0x00, 0x01, 0x02, 0x0f, 0x02]);

    let proto = Command::InSetProtocol(ProtocolParameters::new().initial_guard_time(28));
    assert_eq!(proto.encode(), vec![0xd6, 0x02, 0x00, 28]);

    let comm = Command::InCommRf {
        data: common::fixtures::sensf_req_frame(),
        timeout_ms: 10.0,
    };
    assert_eq!(comm.code(), CommandCode::InCommRf);
    assert_eq!(
        comm.encode(),
        vec![0xd6, 0x04, 0x64, 0x00, 0x06, 0x00, 0xff, 0xff, 0x01, 0x00]
    );
}

#[test]
fn profile_names_parse() {
    for name in ["212F", "424F", "106A", "212A", "424A", "106B", "212B", "424B"] {
        let profile: BitrateProfile = name.parse().unwrap();
        assert_eq!(profile.name(), name);
    }
    assert!("847F".parse::<BitrateProfile>().is_err());
}
