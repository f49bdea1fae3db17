use soroban_sdk::contracttype;

use crate::error::{ ErrorCode, GavelResult };

/// Emergency stop. Only toggles from the opposite state.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PauseSwitch {
    pub paused: bool,
}

impl PauseSwitch {
    pub fn turn_on(&mut self) -> GavelResult {
        if self.paused {
            return Err(ErrorCode::AlreadyPaused);
        }
        self.paused = true;
        Ok(())
    }

    pub fn turn_off(&mut self) -> GavelResult {
        if !self.paused {
            return Err(ErrorCode::NotPaused);
        }
        self.paused = false;
        Ok(())
    }

    pub fn ensure_not_paused(&self) -> GavelResult {
        if self.paused { Err(ErrorCode::Paused) } else { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_only_from_opposite_state() {
        let mut switch = PauseSwitch::default();
        assert_eq!(switch.ensure_not_paused(), Ok(()));
        assert_eq!(switch.turn_off(), Err(ErrorCode::NotPaused));

        switch.turn_on().unwrap();
        assert_eq!(switch.ensure_not_paused(), Err(ErrorCode::Paused));
        assert_eq!(switch.turn_on(), Err(ErrorCode::AlreadyPaused));

        switch.turn_off().unwrap();
        assert!(!switch.paused);
    }
}
