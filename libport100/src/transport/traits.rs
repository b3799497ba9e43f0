// libport100/src/transport/traits.rs
//! The `Transport` trait.

use crate::Result;
use crate::types::DeviceType;

/// Transport trait abstracts the raw bulk channel away from the chipset
/// protocol. Any platform USB layer can implement it.
pub trait Transport {
    /// Write all of `data`. Accepting fewer bytes is an error
    /// (`Error::ShortWrite`).
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read one transfer, waiting at most `timeout_ms`. Returns
    /// `Err(Error::Timeout)` when nothing arrived in time; callers decide
    /// whether that is expected.
    fn read(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Query the detected device type
    fn device_type(&self) -> Result<DeviceType>;

    /// Release the underlying handle. Must be idempotent.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn read(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).read(timeout_ms)
    }

    fn device_type(&self) -> Result<DeviceType> {
        (**self).device_type()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[test]
    fn trait_object_write_read() {
        let mut m: Box<dyn Transport> = Box::new(MockTransport::new(DeviceType::RcS380P));
        m.write(&[0x10]).unwrap();
        assert!(m.read(10).unwrap_err().is_timeout());
        assert_eq!(m.device_type().unwrap(), DeviceType::RcS380P);
        m.close().unwrap();
    }

    #[test]
    fn default_close_is_noop() {
        struct Null;
        impl Transport for Null {
            fn write(&mut self, _data: &[u8]) -> Result<()> {
                Ok(())
            }
            fn read(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
                Err(crate::Error::Timeout)
            }
            fn device_type(&self) -> Result<DeviceType> {
                Ok(DeviceType::default())
            }
        }
        let mut n = Null;
        n.close().unwrap();
        n.close().unwrap();
    }
}
