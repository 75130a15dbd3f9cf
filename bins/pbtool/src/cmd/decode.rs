use robot_pb::json::{dictionary_to_json, to_json};
use robot_pb::{Dictionary, Variant};

use crate::config::{DecodeArgs, Effective, Shape};
use crate::error::PbtoolError;

pub fn run(eff: &Effective, args: &DecodeArgs) -> Result<(), PbtoolError> {
    let bytes = super::read_input(&args.input)?;

    let rendered = match args.shape {
        Shape::Variant => {
            let variant: Variant = eff.codec.decode(&bytes)?;
            if args.json {
                serde_json::to_string_pretty(&to_json(&variant))? + "\n"
            } else {
                variant.to_string()
            }
        }
        Shape::Dictionary => {
            let dict: Dictionary = eff.codec.decode(&bytes)?;
            if args.json {
                serde_json::to_string_pretty(&dictionary_to_json(&dict))? + "\n"
            } else {
                Variant::from(dict).to_string()
            }
        }
    };

    tracing::debug!(input = %args.input, len = bytes.len(), "decoded");
    super::write_output("-", rendered.as_bytes())
}
