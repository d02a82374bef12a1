//! One-shot maneuver classification, handy for checking source phrasing

use anyhow::Result;
use clap::Args;
use navrelay_core::classify::classify;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Maneuver text, e.g. "Turn left onto Elm St"
    pub text: String,
}

pub fn run(args: ClassifyArgs) -> Result<()> {
    let symbol = classify(Some(&args.text));
    println!("{} {:?}", symbol.marker(), symbol);
    Ok(())
}

#[cfg(test)]
mod tests {
    use navrelay_core::DirectionSymbol;
    use navrelay_core::classify::classify;

    #[test]
    fn classifies_sample_phrasing() {
        assert_eq!(
            classify(Some("Turn left onto Elm St")),
            DirectionSymbol::Left
        );
    }
}
