//! Court (`Quadra`) model and its availability state.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Whether a court accepts new bookings.
///
/// Exactly two states with no state-specific data; toggling is a pure
/// transition. The flag gates writes only: flipping a court to unavailable
/// does not invalidate appointments already on the books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }

    pub fn as_flag(self) -> bool {
        matches!(self, Availability::Available)
    }

    pub fn toggle(self) -> Self {
        match self {
            Availability::Available => Availability::Unavailable,
            Availability::Unavailable => Availability::Available,
        }
    }

    pub fn accepts_bookings(self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Court from `"beach-box"."Quadra"`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Court {
    pub id: i32,
    pub nome: String,
    pub localizacao: String,
    #[serde(rename = "idUnidade")]
    pub id_unidade: i32,
    pub precobase: Decimal,
    #[serde(rename = "estaDisponivel")]
    pub esta_disponivel: bool,
    pub tipo: String,
}

impl Court {
    pub fn availability(&self) -> Availability {
        Availability::from_flag(self.esta_disponivel)
    }
}

/// Court row joined with the owning unit's name, as returned by the listing
/// endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourtListing {
    pub id: i32,
    pub nome: String,
    pub localizacao: String,
    #[serde(rename = "idUnidade")]
    pub id_unidade: i32,
    pub unidade: Option<String>,
    pub precobase: Decimal,
    #[serde(rename = "estaDisponivel")]
    pub esta_disponivel: bool,
    pub tipo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_states() {
        assert_eq!(Availability::Available.toggle(), Availability::Unavailable);
        assert_eq!(Availability::Unavailable.toggle(), Availability::Available);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for state in [Availability::Available, Availability::Unavailable] {
            assert_eq!(state.toggle().toggle(), state);
        }
    }

    #[test]
    fn only_available_courts_accept_bookings() {
        assert!(Availability::from_flag(true).accepts_bookings());
        assert!(!Availability::from_flag(false).accepts_bookings());
    }

    #[test]
    fn flag_round_trips() {
        assert!(Availability::from_flag(true).as_flag());
        assert!(!Availability::from_flag(false).as_flag());
    }
}
