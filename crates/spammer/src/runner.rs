//! Round runner.
//!
//! Generates the transaction plans for each round of a load test. Within a
//! round, transactions are generated in parallel; each one draws from its
//! own stream derived from `(seed, round, index)`, so the output for a seed
//! is identical regardless of how many threads do the work.

use crate::config::{ConfigError, LoadTest};
use crate::workloads::{generator_for, TxPlan, WorkloadGenerator};
use loadtest_types::MessageType;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Drives plan generation for a validated load test.
pub struct PlanRunner {
    test: LoadTest,
    generator: Box<dyn WorkloadGenerator>,
}

impl PlanRunner {
    /// Create a runner for a validated load test.
    pub fn new(test: LoadTest) -> Result<Self, ConfigError> {
        let generator = generator_for(&test)?;
        Ok(Self { test, generator })
    }

    /// The load test being run.
    pub fn load_test(&self) -> &LoadTest {
        &self.test
    }

    /// Random stream id for a transaction.
    fn stream_id(&self, round: u64, index: u64) -> u64 {
        round
            .wrapping_mul(self.test.txs_per_block)
            .wrapping_add(index)
    }

    /// Generate one transaction plan.
    pub fn generate_tx(&self, round: u64, index: u64) -> TxPlan {
        let mut rng = self.test.seeds.stream(self.stream_id(round, index));
        let messages = self
            .generator
            .generate_batch(self.test.msgs_per_tx as usize, &mut rng);

        TxPlan {
            round,
            index,
            budget: self.test.budget,
            messages,
        }
    }

    /// Generate every transaction of one round, in index order.
    pub fn generate_round(&self, round: u64) -> Vec<TxPlan> {
        (0..self.test.txs_per_block as usize)
            .into_par_iter()
            .map(|index| self.generate_tx(round, index as u64))
            .collect()
    }

    /// Generate all rounds, handing each transaction to `sink` in order.
    ///
    /// Stops at the first sink error.
    pub fn run<F, E>(&self, mut sink: F) -> Result<RunReport, E>
    where
        F: FnMut(TxPlan) -> Result<(), E>,
    {
        let start = Instant::now();
        let mut report = RunReport::default();

        info!(
            chain_id = %self.test.chain_id,
            group = %self.generator.group(),
            rounds = self.test.rounds,
            txs_per_block = self.test.txs_per_block,
            msgs_per_tx = self.test.msgs_per_tx,
            seed = self.test.seeds.seed(),
            "Generating load-test plans"
        );

        for round in 0..self.test.rounds {
            let txs = self.generate_round(round);
            let mut round_report = RoundReport::new(round);
            for tx in txs {
                round_report.record(&tx);
                sink(tx)?;
            }

            debug!(
                round,
                transactions = round_report.transactions,
                messages = round_report.messages,
                "Round generated"
            );
            report.absorb(round_report);
        }

        report.elapsed = start.elapsed();
        info!(
            transactions = report.transactions,
            messages = report.messages,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Plan generation complete"
        );
        Ok(report)
    }
}

/// Counts for one generated round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u64,
    pub transactions: u64,
    pub messages: u64,
    pub by_type: BTreeMap<MessageType, u64>,
}

impl RoundReport {
    pub fn new(round: u64) -> Self {
        Self {
            round,
            ..Default::default()
        }
    }

    /// Count a transaction and its messages.
    pub fn record(&mut self, tx: &TxPlan) {
        self.transactions += 1;
        for message in &tx.messages {
            self.messages += 1;
            *self.by_type.entry(message.message_type()).or_insert(0) += 1;
        }
    }
}

/// Summary of a full run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub rounds: Vec<RoundReport>,
    pub transactions: u64,
    pub messages: u64,
    pub by_type: BTreeMap<MessageType, u64>,
    pub elapsed: Duration,
}

impl RunReport {
    fn absorb(&mut self, round: RoundReport) {
        self.transactions += round.transactions;
        self.messages += round.messages;
        for (kind, count) in &round.by_type {
            *self.by_type.entry(*kind).or_insert(0) += count;
        }
        self.rounds.push(round);
    }

    /// Fraction of messages with the given label.
    pub fn fraction(&self, kind: MessageType) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        self.by_type.get(&kind).copied().unwrap_or(0) as f64 / self.messages as f64
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds:       {}", self.rounds.len())?;
        for round in &self.rounds {
            writeln!(
                f,
                "  round {:<8} {:>6} txs {:>8} msgs",
                round.round, round.transactions, round.messages
            )?;
        }
        writeln!(f, "Transactions: {}", self.transactions)?;
        writeln!(f, "Messages:     {}", self.messages)?;
        for (kind, count) in &self.by_type {
            writeln!(
                f,
                "  {:<17} {:>8} ({:.2}%)",
                kind.as_str(),
                count,
                self.fraction(*kind) * 100.0
            )?;
        }
        write!(f, "Elapsed:      {:?}", self.elapsed)
    }
}
