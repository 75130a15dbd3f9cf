use robot_pb::json::{dictionary_from_json, from_json};

use crate::config::{EncodeArgs, Effective, Shape};
use crate::error::PbtoolError;

pub fn run(eff: &Effective, args: &EncodeArgs) -> Result<(), PbtoolError> {
    let input = super::read_input(&args.input)?;
    let json: serde_json::Value = serde_json::from_slice(&input)?;

    let bytes = match args.shape {
        Shape::Variant => {
            let variant = from_json(&json)?;
            eff.codec.check(&variant)?;
            eff.codec.encode(&variant)
        }
        Shape::Dictionary => {
            let dict = dictionary_from_json(&json)?;
            eff.codec.check(&dict)?;
            eff.codec.encode(&dict)
        }
    };

    super::write_output(&args.output, &bytes)?;
    tracing::info!(
        input = %args.input,
        output = %args.output,
        shape = ?args.shape,
        len = bytes.len(),
        "encoded"
    );
    Ok(())
}
