use crate::app::prompts::Prompts;
use crate::core::engine::PackingEngine;
use crate::domain::model::PackingReport;
use crate::domain::ports::{Console, Packer};
use crate::utils::error::{PackerError, Result};
use std::collections::VecDeque;

// Reservation ceiling; the item count comes straight from the user.
const MAX_PREALLOCATED_WEIGHTS: usize = 1024;

/// Prompts for capacity, item count and weights, then runs the engine.
pub struct InteractiveShell<C: Console, P: Packer> {
    console: C,
    engine: PackingEngine<P>,
    prompts: Prompts,
    pending: VecDeque<String>,
}

impl<C: Console, P: Packer> InteractiveShell<C, P> {
    pub fn new(console: C, engine: PackingEngine<P>, prompts: Prompts) -> Self {
        Self {
            console,
            engine,
            prompts,
            pending: VecDeque::new(),
        }
    }

    pub fn run(&mut self) -> Result<PackingReport> {
        let capacity = self.read_capacity()?;
        let item_count = self.read_item_count()?;
        let weights = self.read_weights(item_count)?;
        tracing::debug!("Read capacity {} and weights {:?}", capacity, weights);

        self.engine.run(capacity, &weights)
    }

    pub fn read_capacity(&mut self) -> Result<u64> {
        let prompt = self.prompts.capacity();
        self.read_number(prompt, "capacity")
    }

    pub fn read_item_count(&mut self) -> Result<usize> {
        let prompt = self.prompts.item_count();
        let count = self.read_number(prompt, "item count")?;
        usize::try_from(count).map_err(|_| PackerError::MalformedInput {
            field: "item count".to_string(),
            value: count.to_string(),
        })
    }

    pub fn read_weights(&mut self, item_count: usize) -> Result<Vec<u64>> {
        if item_count == 0 {
            return Ok(Vec::new());
        }

        self.console.say(self.prompts.weights_header())?;
        let mut weights = Vec::with_capacity(item_count.min(MAX_PREALLOCATED_WEIGHTS));
        for index in 1..=item_count {
            let prompt = self.prompts.item_weight(index);
            let field = format!("weight of item {}", index);
            weights.push(self.read_number(&prompt, &field)?);
        }
        Ok(weights)
    }

    pub fn into_console(self) -> C {
        self.console
    }

    // Numbers are whitespace-separated tokens; one line may answer several prompts.
    fn read_number(&mut self, prompt: &str, field: &str) -> Result<u64> {
        self.console.prompt(prompt)?;
        let token = self.next_token(field)?;
        token.parse::<u64>().map_err(|_| PackerError::MalformedInput {
            field: field.to_string(),
            value: token,
        })
    }

    fn next_token(&mut self, field: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let Some(line) = self.console.read_line()? else {
                return Err(PackerError::UnexpectedEof {
                    field: field.to_string(),
                });
            };
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}
