use crate::BookingError;
use safar_shared::Passenger;

/// Editable passenger list with a per-vertical upper bound. Out-of-range
/// edits come back as descriptive errors for the form to show; the list
/// itself is left untouched.
#[derive(Debug, Clone)]
pub struct PassengerManifest {
    passengers: Vec<Passenger>,
    max: usize,
}

impl PassengerManifest {
    /// Starts with a single blank passenger, the way the booking forms do.
    pub fn new(max: usize) -> Self {
        Self {
            passengers: vec![Passenger::default()],
            max,
        }
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Append a blank passenger entry, up to the vertical's limit.
    pub fn add(&mut self) -> Result<(), BookingError> {
        if self.passengers.len() >= self.max {
            return Err(BookingError::TooManyPassengers { max: self.max });
        }
        self.passengers.push(Passenger::default());
        Ok(())
    }

    /// Remove the entry at `index`. The last remaining passenger cannot be
    /// removed.
    pub fn remove(&mut self, index: usize) -> Result<(), BookingError> {
        if self.passengers.len() <= 1 {
            return Err(BookingError::NoPassengers);
        }
        if index >= self.passengers.len() {
            return Err(BookingError::InvalidPassenger {
                index,
                reason: "no passenger at this position".to_string(),
            });
        }
        self.passengers.remove(index);
        Ok(())
    }

    pub fn set(&mut self, index: usize, passenger: Passenger) -> Result<(), BookingError> {
        match self.passengers.get_mut(index) {
            Some(slot) => {
                *slot = passenger;
                Ok(())
            }
            None => Err(BookingError::InvalidPassenger {
                index,
                reason: "no passenger at this position".to_string(),
            }),
        }
    }
}
