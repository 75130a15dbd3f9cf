pub mod decode;
pub mod encode;

use std::io::{Read, Write};

use crate::error::PbtoolError;

const STDIO: &str = "-";

pub(crate) fn read_input(path: &str) -> Result<Vec<u8>, PbtoolError> {
    let io_err = |source| PbtoolError::Io {
        path: path.to_owned(),
        source,
    };
    if path == STDIO {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(io_err)?;
        Ok(buf)
    } else {
        std::fs::read(path).map_err(io_err)
    }
}

pub(crate) fn write_output(path: &str, bytes: &[u8]) -> Result<(), PbtoolError> {
    let io_err = |source| PbtoolError::Io {
        path: path.to_owned(),
        source,
    };
    if path == STDIO {
        let mut out = std::io::stdout().lock();
        out.write_all(bytes).and_then(|()| out.flush()).map_err(io_err)
    } else {
        std::fs::write(path, bytes).map_err(io_err)
    }
}
