// Execution engine for the Loom interpreter

use crate::display::DisplaySink;
use crate::interpreter::config::ExecutionConfig;
use crate::interpreter::constants::QUIT_POLL_INTERVAL;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::random::{CellSource, RandomCells};
use crate::memory::{cursor::Cursor, grid::Grid};
use crate::parser::{repeat, ParseError, Program};
use std::thread;

/// A `*` diagnostic report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub cursor: Cursor,
    /// Position of the `*` in canonical text
    pub pc: usize,
    /// Value of the cell under the cursor
    pub cell: u8,
}

/// What a single [`Interpreter::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An instruction ran and the program has more to do
    Continue,
    /// An `x` ran and a frame went to the display
    Committed,
    /// The program counter reached the end of the program
    Halted,
}

/// How a [`Interpreter::run`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The program ran to its end
    Halted { steps: u64, commits: usize },
    /// The display asked to quit between two instructions
    Interrupted { steps: u64, commits: usize },
}

/// The interpreter that executes a Loom program
pub struct Interpreter {
    /// Validated program (canonical text and bracket index)
    program: Program,

    /// Working grid, written by arithmetic and `?`
    grid: Grid,

    /// Presentation buffer, written only by `x`
    screen: Grid,

    cursor: Cursor,

    /// Index into the canonical text. `program.len()` is the end sentinel.
    pc: usize,

    /// Opener positions of the loops currently being iterated
    pub(crate) loop_stack: Vec<usize>,

    /// Source of values for `?`
    cells: Box<dyn CellSource>,

    config: ExecutionConfig,

    /// Dispatched instruction count
    steps: u64,

    commits: usize,

    breakpoints: Vec<Breakpoint>,
}

impl Interpreter {
    /// Create an interpreter for a parsed program.
    ///
    /// `?` draws from a generator seeded with `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn new(program: Program, config: ExecutionConfig) -> Self {
        let cells: Box<dyn CellSource> = match config.seed {
            Some(seed) => Box::new(RandomCells::seeded(seed)),
            None => Box::new(RandomCells::from_entropy()),
        };

        Interpreter {
            program,
            grid: Grid::new(),
            screen: Grid::initial_screen(),
            cursor: Cursor::ORIGIN,
            pc: 0,
            loop_stack: Vec::new(),
            cells,
            config,
            steps: 0,
            commits: 0,
            breakpoints: Vec::new(),
        }
    }

    /// Parse `source` and create an interpreter for it
    pub fn from_source(source: &str, config: ExecutionConfig) -> Result<Self, ParseError> {
        Ok(Self::new(Program::parse(source)?, config))
    }

    /// Replace the source of values for `?`
    pub fn with_cell_source(mut self, cells: impl CellSource + 'static) -> Self {
        self.cells = Box::new(cells);
        self
    }

    /// Run the program to completion.
    ///
    /// Between instructions the display is asked whether the user wants to
    /// quit: after every commit and every [`QUIT_POLL_INTERVAL`] steps.
    pub fn run(&mut self, sink: &mut dyn DisplaySink) -> Result<Outcome, RuntimeError> {
        loop {
            let step = self.step(sink)?;
            match step {
                Step::Halted => {
                    tracing::debug!(steps = self.steps, commits = self.commits, "program halted");
                    return Ok(Outcome::Halted {
                        steps: self.steps,
                        commits: self.commits,
                    });
                }
                Step::Committed => {}
                Step::Continue if self.steps % QUIT_POLL_INTERVAL == 0 => {}
                Step::Continue => continue,
            }

            if sink.quit_requested() {
                tracing::debug!(steps = self.steps, pc = self.pc, "quit requested, stopping");
                return Ok(Outcome::Interrupted {
                    steps: self.steps,
                    commits: self.commits,
                });
            }
        }
    }

    /// Execute exactly one instruction
    pub fn step(&mut self, sink: &mut dyn DisplaySink) -> Result<Step, RuntimeError> {
        let Some(&byte) = self.program.bytes().get(self.pc) else {
            debug_assert!(self.loop_stack.is_empty(), "loop stack not empty at halt");
            return Ok(Step::Halted);
        };

        if let Some(limit) = self.config.step_limit {
            if self.steps >= limit {
                return Err(RuntimeError::StepLimitExceeded { limit });
            }
        }

        let ch = byte as char;
        tracing::trace!(pc = self.pc, %ch, x = self.cursor.x, y = self.cursor.y, "dispatch");

        let mut step = Step::Continue;
        match ch {
            '>' | '<' | '^' | 'v' | '+' | '-' => self.execute_repeatable(ch),
            '?' => {
                let value = self.cells.next_cell();
                self.grid.set(self.cursor, value);
            }
            'o' => self.cursor.home(),
            'x' => {
                self.commit(sink)?;
                step = Step::Committed;
            }
            '.' => self.grid.set(self.cursor, 0),
            '*' => self.report_breakpoint(sink),
            '[' | '{' | '(' => self.enter_loop()?,
            ']' | '}' | ')' => self.exit_loop()?,
            other => {
                return Err(RuntimeError::UnexpectedCharacter {
                    ch: other,
                    pc: self.pc,
                })
            }
        }

        self.pc += 1;
        self.steps += 1;
        Ok(step)
    }

    /// Apply a repeatable operator and leave PC on the last character of its run
    fn execute_repeatable(&mut self, op: char) {
        let run = repeat::scan(self.program.bytes(), self.pc);
        let n = run.count;
        match op {
            '>' => self.cursor.right(n),
            '<' => self.cursor.left(n),
            'v' => self.cursor.down(n),
            '^' => self.cursor.up(n),
            '+' => self.grid.add(self.cursor, n),
            '-' => self.grid.sub(self.cursor, n),
            _ => unreachable!("not a repeatable operator: {op}"),
        }
        self.pc = run.last;
    }

    /// `x`: copy the cell under the cursor to the screen and hand the screen to the display
    fn commit(&mut self, sink: &mut dyn DisplaySink) -> Result<(), RuntimeError> {
        self.screen.copy_cell_from(&self.grid, self.cursor);
        sink.commit(&self.screen)?;
        self.commits += 1;

        if !self.config.pacing.is_zero() {
            thread::sleep(self.config.pacing);
        }
        Ok(())
    }

    fn report_breakpoint(&mut self, sink: &mut dyn DisplaySink) {
        let report = Breakpoint {
            cursor: self.cursor,
            pc: self.pc,
            cell: self.current_cell(),
        };
        tracing::info!(
            target: "loom::breakpoint",
            x = report.cursor.x,
            y = report.cursor.y,
            pc = report.pc,
            cell = report.cell,
            "breakpoint"
        );
        self.breakpoints.push(report);
        sink.breakpoint(&report);
    }

    /// Value of the cell under the cursor
    pub fn current_cell(&self) -> u8 {
        self.grid.at(self.cursor)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn screen(&self) -> &Grid {
        &self.screen
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub(crate) fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    /// Number of loops currently being iterated
    pub fn loop_depth(&self) -> usize {
        self.loop_stack.len()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn is_halted(&self) -> bool {
        self.pc >= self.program.len()
    }
}
