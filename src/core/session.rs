use crate::config::{Config, validate_shift_id};
use crate::core::aggregator;
use crate::core::haul_log::HaulLog;
use crate::core::rng::SimRandom;
use crate::core::simulation;
use crate::errors::AppResult;
use crate::models::shift_report::ShiftMeta;
use crate::models::truck::initial_fleet;
use crate::models::{LogRecord, ShiftReport, Truck, WrapPolicy};
use chrono::{Local, NaiveTime};

/// Upper bound on refreshes requested by a single command.
pub const MAX_STEPS: u32 = 10_000;

/// Everything a simulation session owns: the fleet, its log and the shift it
/// is currently running. Command handlers create one and drive it.
#[derive(Debug)]
pub struct Session {
    trucks: Vec<Truck>,
    log: HaulLog,
    shift_id: String,
    meta: ShiftMeta,
    policy: WrapPolicy,
    steps: u64,
}

impl Session {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        cfg.validate()?;

        log::info!(
            "session started: mine={} shift={} policy={}",
            cfg.mine_name,
            cfg.shift_id,
            cfg.wrap_policy.as_str()
        );

        Ok(Self {
            trucks: initial_fleet(&cfg.shovel_id),
            log: HaulLog::new(cfg.log_retention),
            shift_id: cfg.shift_id.clone(),
            meta: cfg.shift_meta(),
            policy: cfg.wrap_policy,
            steps: 0,
        })
    }

    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    pub fn log(&self) -> &HaulLog {
        &self.log
    }

    pub fn shift_id(&self) -> &str {
        &self.shift_id
    }

    pub fn policy(&self) -> WrapPolicy {
        self.policy
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    pub fn recent(&self, n: usize) -> Vec<&LogRecord> {
        self.log.recent(n).collect()
    }

    /// One refresh stamped with the local wall clock.
    pub fn step<R: SimRandom + ?Sized>(&mut self, rng: &mut R) -> AppResult<usize> {
        self.step_at(rng, Local::now().time())
    }

    pub fn step_at<R: SimRandom + ?Sized>(&mut self, rng: &mut R, now: NaiveTime) -> AppResult<usize> {
        let n = simulation::step(
            &mut self.trucks,
            &mut self.log,
            rng,
            self.policy,
            &self.shift_id,
            now,
        )?;
        self.steps += 1;
        Ok(n)
    }

    /// Close the current shift and tag subsequent records with `shift_id`.
    pub fn begin_shift(&mut self, shift_id: &str) -> AppResult<()> {
        validate_shift_id(shift_id)?;
        log::info!("shift change: {} -> {}", self.shift_id, shift_id);
        self.shift_id = shift_id.to_string();
        Ok(())
    }

    /// "Shift Over": report for the shift currently running.
    pub fn shift_over(&self) -> ShiftReport {
        self.report_for(&self.shift_id)
    }

    pub fn report_for(&self, shift_id: &str) -> ShiftReport {
        if self.log.evicted() > 0 {
            log::warn!(
                "{} log records were evicted by retention; report for {} covers the retained window only",
                self.log.evicted(),
                shift_id
            );
        }

        let report = aggregator::shift_report(self.log.iter(), shift_id, &self.meta);
        log::info!(
            "shift report {}: {:.2} t",
            report.shift_id,
            report.total_quantity
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SimRng;
    use crate::errors::AppError;
    use crate::models::FLEET_SIZE;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn new_session_matches_seed_state() {
        let s = Session::new(&Config::default()).unwrap();
        assert_eq!(s.trucks().len(), FLEET_SIZE);
        assert!(s.log().is_empty());
        assert_eq!(s.shift_id(), "WS1");
        assert_eq!(s.steps_taken(), 0);
        assert_eq!(s.shift_over().total_quantity, 0.0);
    }

    #[test]
    fn each_step_appends_one_record_per_truck() {
        let mut s = Session::new(&Config::default()).unwrap();
        let mut rng = SimRng::from_seed_u64(5);

        for n in 1..=10 {
            s.step_at(&mut rng, noon()).unwrap();
            assert_eq!(s.log().len(), n * FLEET_SIZE);
        }
        assert_eq!(s.steps_taken(), 10);
        assert_eq!(s.recent(14).len(), 14);
    }

    #[test]
    fn shift_over_sums_the_whole_single_shift_log() {
        let mut s = Session::new(&Config::default()).unwrap();
        let mut rng = SimRng::from_seed_u64(11);
        for _ in 0..25 {
            s.step(&mut rng).unwrap();
        }

        let expected: f64 = s.log().iter().map(|r| r.weight).sum();
        let report = s.shift_over();
        assert_eq!(report.total_quantity, (expected * 100.0).round() / 100.0);
        assert_eq!(report.serial_no, 1);
        assert_eq!(report.grade, "W-IV");
    }

    #[test]
    fn shifts_are_reported_separately() {
        let mut s = Session::new(&Config::default()).unwrap();
        let mut rng = SimRng::from_seed_u64(3);

        for _ in 0..5 {
            s.step_at(&mut rng, noon()).unwrap();
        }
        s.begin_shift("WS2").unwrap();
        for _ in 0..5 {
            s.step_at(&mut rng, noon()).unwrap();
        }

        let ws1: f64 = s
            .log()
            .iter()
            .filter(|r| r.shift_id == "WS1")
            .map(|r| r.weight)
            .sum();
        assert_eq!(
            s.report_for("WS1").total_quantity,
            (ws1 * 100.0).round() / 100.0
        );
        assert_eq!(s.shift_over().shift_id, "WS2");
        assert_eq!(s.log().iter().filter(|r| r.shift_id == "WS2").count(), 5 * FLEET_SIZE);
    }

    #[test]
    fn blank_shift_id_is_rejected() {
        let mut s = Session::new(&Config::default()).unwrap();
        assert!(matches!(s.begin_shift(""), Err(AppError::InvalidShiftId(_))));
        assert_eq!(s.shift_id(), "WS1");
    }

    #[test]
    fn retention_bounds_the_log() {
        let cfg = Config {
            log_retention: Some(20),
            ..Config::default()
        };
        let mut s = Session::new(&cfg).unwrap();
        let mut rng = SimRng::from_seed_u64(8);
        for _ in 0..3 {
            s.step_at(&mut rng, noon()).unwrap();
        }
        assert_eq!(s.log().len(), 20);
        assert_eq!(s.log().evicted(), 3 * FLEET_SIZE as u64 - 20);
    }
}
