//! Loop control for the three bracket families.
//!
//! Adds `impl Interpreter` methods for openers (`[ { (`) and closers
//! (`] } )`). Jump targets come from the static bracket index built at parse
//! time. The loop stack only tracks which loops are live: an opener pushes
//! its position when the body is entered, and the matching closer pops it
//! when the loop is left.
//!
//! ```text
//! opener, cell == 0  →  PC = matching closer        (body skipped, no push)
//! opener, cell != 0  →  push opener                 (enter body)
//! closer, cell != 0  →  PC = matching opener        (repeat body, stack kept)
//! closer, cell == 0  →  pop                         (leave loop)
//! ```
//!
//! After a jump the engine's usual PC increment moves past the bracket, so
//! the opener's test is not re-run on the way back.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;

impl Interpreter {
    /// Matching bracket for the bracket under PC
    fn partner(&self) -> Result<usize, RuntimeError> {
        let pc = self.pc();
        self.program()
            .brackets()
            .partner(pc)
            .ok_or_else(|| RuntimeError::UnexpectedCharacter {
                ch: self.program().bytes()[pc] as char,
                pc,
            })
    }

    pub(crate) fn enter_loop(&mut self) -> Result<(), RuntimeError> {
        let closer = self.partner()?;
        if self.current_cell() == 0 {
            self.set_pc(closer);
        } else {
            self.loop_stack.push(self.pc());
        }
        Ok(())
    }

    pub(crate) fn exit_loop(&mut self) -> Result<(), RuntimeError> {
        let opener = self.partner()?;
        if self.current_cell() != 0 {
            debug_assert_eq!(self.loop_stack.last(), Some(&opener));
            self.set_pc(opener);
        } else {
            self.loop_stack.pop();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::display::headless::RecordingDisplay;
    use crate::interpreter::config::ExecutionConfig;
    use crate::interpreter::engine::{Interpreter, Step};

    fn interpreter(source: &str) -> Interpreter {
        Interpreter::from_source(source, ExecutionConfig::default()).expect("parse failed")
    }

    #[test]
    fn test_zero_cell_skips_body() {
        let mut interp = interpreter("[+++]>+");
        interp.run(&mut RecordingDisplay::new()).unwrap();
        assert_eq!(interp.grid().get(0, 0), 0);
        assert_eq!(interp.grid().get(1, 0), 1);
        assert_eq!(interp.loop_depth(), 0);
    }

    #[test]
    fn test_countdown_loop() {
        let mut interp = interpreter("+5[>+2<-]");
        interp.run(&mut RecordingDisplay::new()).unwrap();
        assert_eq!(interp.grid().get(0, 0), 0);
        assert_eq!(interp.grid().get(1, 0), 10);
        assert_eq!(interp.loop_depth(), 0);
    }

    #[test]
    fn test_loop_depth_while_iterating() {
        let mut interp = interpreter("+2{(-)}");
        let mut display = RecordingDisplay::new();

        // `+2`, then `{` enters the outer loop
        interp.step(&mut display).unwrap();
        interp.step(&mut display).unwrap();
        assert_eq!(interp.loop_depth(), 1);

        // `(` enters the inner loop
        interp.step(&mut display).unwrap();
        assert_eq!(interp.loop_depth(), 2);

        while interp.step(&mut display).unwrap() != Step::Halted {}
        assert_eq!(interp.loop_depth(), 0);
        assert_eq!(interp.grid().get(0, 0), 0);
    }

    #[test]
    fn test_families_are_interchangeable() {
        let results: Vec<u8> = ["+4[>+<-]>", "+4{>+<-}>", "+4(>+<-)>"]
            .iter()
            .map(|source| {
                let mut interp = interpreter(source);
                interp.run(&mut RecordingDisplay::new()).unwrap();
                interp.current_cell()
            })
            .collect();
        assert_eq!(results, vec![4, 4, 4]);
    }

    #[test]
    fn test_nested_loops() {
        // 3 * 4 = 12 into (2, 0)
        let mut interp = interpreter("+3[>+4[>+<-]<-]");
        interp.run(&mut RecordingDisplay::new()).unwrap();
        assert_eq!(interp.grid().get(2, 0), 12);
        assert_eq!(interp.grid().get(1, 0), 0);
        assert_eq!(interp.grid().get(0, 0), 0);
    }
}
