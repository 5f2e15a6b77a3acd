use crate::BookingError;
use std::collections::HashSet;

/// Labeled seat grid for a bus trip. Seats are `{row}{column}` with rows
/// numbered from 1 and columns lettered from A, so the default 4x5 grid
/// runs 1A through 4E. A fixed subset is blocked to stand in for already
/// sold inventory.
#[derive(Debug, Clone)]
pub struct SeatMap {
    rows: u32,
    columns: u32,
    blocked: HashSet<String>,
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new(
            4,
            5,
            ["1A", "2B", "3C", "4D"].iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl SeatMap {
    /// Column letters stop at Z; no real coach is wider than that.
    pub fn new(rows: u32, columns: u32, blocked: HashSet<String>) -> Self {
        Self {
            rows,
            columns: columns.min(26),
            blocked,
        }
    }

    /// Every seat label in row-major order.
    pub fn labels(&self) -> Vec<String> {
        (0..self.rows * self.columns)
            .map(|i| {
                let row = i / self.columns + 1;
                let column = (b'A' + (i % self.columns) as u8) as char;
                format!("{}{}", row, column)
            })
            .collect()
    }

    pub fn contains(&self, seat: &str) -> bool {
        self.labels().iter().any(|label| label == seat)
    }

    pub fn is_blocked(&self, seat: &str) -> bool {
        self.blocked.contains(seat)
    }

    /// A seat can be picked when it exists on the grid and is not blocked.
    pub fn is_selectable(&self, seat: &str) -> bool {
        self.contains(seat) && !self.is_blocked(seat)
    }

    /// Exactly one open seat per passenger, no repeats.
    pub fn validate_selection(
        &self,
        seats: &[String],
        passenger_count: usize,
    ) -> Result<(), BookingError> {
        if seats.len() != passenger_count {
            return Err(BookingError::SeatCountMismatch {
                required: passenger_count,
                selected: seats.len(),
            });
        }
        let mut seen = HashSet::new();
        for seat in seats {
            if !self.is_selectable(seat) {
                return Err(BookingError::SeatUnavailable(seat.clone()));
            }
            if !seen.insert(seat.as_str()) {
                return Err(BookingError::DuplicateSeat(seat.clone()));
            }
        }
        Ok(())
    }
}
