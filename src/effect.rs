//! Side effects declared by the reducer and handled by the run loop.
//!
//! Effects are descriptions of work, not the work itself; the reducer stays
//! pure and the runtime decides how to execute them.

use crate::state::City;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single outbound weather request for `city`.
    FetchWeather { city: City },
}
