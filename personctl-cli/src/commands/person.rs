//! Print the person envelope without starting a listener.

use anyhow::{Context, Result};
use clap::Parser;

use personctl_server::{PersonEnvelope, PersonProvider, StaticProvider};

/// Arguments for the person command
#[derive(Parser, Debug)]
pub struct PersonArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Encode the stub provider's record exactly as `GET /person` would
pub fn render_person(provider: &impl PersonProvider, pretty: bool) -> Result<String> {
    let envelope = PersonEnvelope {
        person: provider.get_person().context("Provider failed")?,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    };
    json.context("Failed to encode person envelope")
}

pub fn run_person(args: PersonArgs) -> Result<()> {
    println!("{}", render_person(&StaticProvider, args.pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use personctl_server::{Person, ProviderError};

    struct Failing;

    impl PersonProvider for Failing {
        fn get_person(&self) -> personctl_core::Result<Person> {
            Err(ProviderError::NotFound)
        }
    }

    #[test]
    fn compact_output_matches_wire_body() {
        assert_eq!(
            render_person(&StaticProvider, false).unwrap(),
            r#"{"person":{"name":"John Doe","age":30,"email":"john.doe@example.com","active":true}}"#
        );
    }

    #[test]
    fn provider_failure_is_reported() {
        let err = render_person(&Failing, false).unwrap_err();
        assert!(format!("{err:#}").contains("Person not found"));
    }
}
