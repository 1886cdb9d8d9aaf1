pub mod remainder;
pub mod roulette;
pub mod selection_strategy;
pub mod sus;
pub mod tournament;

pub use remainder::RemainderStochasticSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use sus::StochasticUniversalSelection;
pub use tournament::TournamentSelection;

use crate::error::Result;
use crate::evolution::options::{GaOptions, SelectionMethod};

/// Builds the selection strategy named by the options.
///
/// # Errors
///
/// Returns an error if the configured tournament size is invalid for the
/// tournament method.
pub fn build_strategy(options: &GaOptions) -> Result<Box<dyn SelectionStrategy>> {
    Ok(match options.get_selection_method() {
        SelectionMethod::StochasticUniversal => Box::new(StochasticUniversalSelection::new()),
        SelectionMethod::RouletteWheel => Box::new(RouletteWheelSelection::new()),
        SelectionMethod::StochasticRemainder => Box::new(RemainderStochasticSelection::new()),
        SelectionMethod::Tournament => {
            Box::new(TournamentSelection::new(options.get_tournament_size())?)
        }
    })
}
