use jsonqa_core::intent::default_rules;

/// Strategy for printing the built-in rule table as JSON.
///
/// The output is a valid `--rules` file and the usual starting point for a
/// custom table.
#[derive(Debug, Clone, Copy)]
pub struct DumpRulesStrategy;

impl super::CommandStrategy for DumpRulesStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&default_rules())?;
        println!("{json}");
        Ok(())
    }
}
