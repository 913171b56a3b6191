use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use hpfold::core::energy::params::ContactParams;
use hpfold::core::energy::scoring::Scorer;
use hpfold::core::io::folding::FoldingRecord;
use hpfold::core::models::lattice::LatticeState;
use hpfold::core::models::residue::Sequence;
use hpfold::core::models::step::Folding;

pub fn run(args: ScoreArgs) -> Result<()> {
    let sequence: Sequence = args
        .sequence
        .parse()
        .map_err(|e| CliError::Argument(format!("{e}")))?;

    let codes = parse_step_codes(&args.folding)?;
    let folding =
        Folding::from_codes(&codes).map_err(|e| CliError::Argument(e.to_string()))?;
    let state = LatticeState::fold(&sequence, &folding)
        .map_err(|e| CliError::Argument(e.to_string()))?;

    let params = match &args.energy_params {
        Some(path) => ContactParams::load(path)?,
        None => ContactParams::default(),
    };
    let score = Scorer::new(&params).score(sequence.residues(), &state);

    FoldingRecord::new(&sequence, &folding, score).write_csv(std::io::stdout().lock())?;
    Ok(())
}

fn parse_step_codes(input: &str) -> Result<Vec<i8>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|field| {
            field.trim().parse::<i8>().map_err(|_| {
                CliError::Argument(format!("'{}' is not a valid step code", field.trim()))
            })
        })
        .collect()
}
