#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::Result;

    use crate::{
        clock::ScriptedClock,
        config::SweepConfig,
        error::BenchError,
        op::Operation,
        sweep::{Speedup, SweepPoint, run_sweep, sweep},
    };

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn results_align_with_size_sequence() -> Result<()> {
        let config = SweepConfig::new(1_000, 100_000, 3)?;
        let report = sweep(&config, "Multiplication")?;

        assert_eq!(report.operation, Operation::Multiplication);
        assert_eq!(report.sizes(), config.sizes());
        assert_eq!(report.loop_durations().len(), 3);
        assert_eq!(report.vectorized_durations().len(), 3);
        assert_eq!(report.speedups().len(), 3);
        for point in &report.points {
            assert!(point.loop_secs >= 0.0);
            assert!(point.vectorized_secs >= 0.0);
        }
        Ok(())
    }

    #[test]
    fn probes_run_loop_then_vectorized_per_size() -> Result<()> {
        // Durations are handed out in call order: loop(s0), vec(s0), loop(s1), ...
        let clock = ScriptedClock::new(vec![ms(10), ms(1), ms(20), ms(2), ms(40), ms(4)]);
        let config = SweepConfig::new(1_000, 100_000, 3)?;
        let report = run_sweep(&config, Operation::Addition, &clock);

        assert_eq!(clock.calls(), 6);
        assert_eq!(report.loop_durations(), vec![0.010, 0.020, 0.040]);
        assert_eq!(report.vectorized_durations(), vec![0.001, 0.002, 0.004]);
        assert_eq!(report.sizes(), vec![1_000, 10_000, 100_000]);
        Ok(())
    }

    #[test]
    fn speedup_is_positive_and_finite_when_vectorized_is_nonzero() -> Result<()> {
        let clock = ScriptedClock::new(vec![ms(9), ms(3)]);
        let config = SweepConfig::new(1_000, 10_000, 2)?;
        let report = run_sweep(&config, Operation::Power, &clock);

        for speedup in report.speedups() {
            let ratio = speedup.ratio().expect("finite ratio");
            assert!(ratio > 0.0 && ratio.is_finite());
        }
        assert_eq!(report.points[0].speedup, Speedup::Ratio(3.0));

        // A zero loop reading has no ratio; it must not surface as 0.00x.
        let clock = ScriptedClock::new(vec![Duration::ZERO, ms(1), ms(6), ms(2)]);
        let report = run_sweep(&config, Operation::Power, &clock);
        assert_eq!(report.points[0].speedup, Speedup::Unmeasured);
        assert_eq!(report.points[0].speedup.ratio(), None);
        for ratio in report.speedups().into_iter().filter_map(Speedup::ratio) {
            assert!(ratio > 0.0 && ratio.is_finite());
        }
        let summary = report.summary();
        assert_eq!(summary.min_speedup, Some(3.0));
        assert_eq!(summary.max_speedup, Some(3.0));
        assert_eq!(summary.zero_readings, 1);
        assert!(!summary.vectorized_always_faster);
        Ok(())
    }

    #[test]
    fn zero_loop_reading_is_unmeasured() {
        let point = SweepPoint::new(1_000, Duration::ZERO, ms(1));
        assert_eq!(point.speedup, Speedup::Unmeasured);
        assert_eq!(point.speedup.to_string(), "n/a");
        assert_eq!(Option::<f64>::from(point.speedup), None);
    }

    #[test]
    fn zero_vectorized_duration_is_unbounded() {
        let point = SweepPoint::new(1_000, ms(5), Duration::ZERO);
        assert_eq!(point.speedup, Speedup::Unbounded);
        assert_eq!(point.speedup.ratio(), None);
        assert_eq!(point.speedup.to_string(), "unbounded");
    }

    #[test]
    fn all_zero_clock_does_not_fault() -> Result<()> {
        let clock = ScriptedClock::default();
        let config = SweepConfig::new(1_000, 1_000, 2)?;
        let report = run_sweep(&config, Operation::Addition, &clock);

        assert_eq!(report.sizes(), vec![1_000, 1_000]);
        assert!(report.speedups().iter().all(|s| *s == Speedup::Unmeasured));
        let summary = report.summary();
        assert_eq!(summary.max_speedup, None);
        assert_eq!(summary.min_speedup, None);
        assert!(!summary.vectorized_always_faster);
        assert_eq!(summary.zero_readings, 2);
        Ok(())
    }

    #[test]
    fn summary_picks_extremes_over_finite_ratios() -> Result<()> {
        let clock = ScriptedClock::new(vec![ms(10), ms(5), ms(30), Duration::ZERO, ms(40), ms(4)]);
        let config = SweepConfig::new(1_000, 100_000, 3)?;
        let summary = run_sweep(&config, Operation::Addition, &clock).summary();

        assert_eq!(summary.max_speedup, Some(10.0));
        assert_eq!(summary.min_speedup, Some(2.0));
        assert!(summary.vectorized_always_faster);
        assert_eq!(summary.zero_readings, 1);
        Ok(())
    }

    #[test]
    fn slower_vectorized_point_is_reported() -> Result<()> {
        let clock = ScriptedClock::new(vec![ms(1), ms(2), ms(8), ms(2)]);
        let config = SweepConfig::new(1_000, 10_000, 2)?;
        let summary = run_sweep(&config, Operation::Addition, &clock).summary();

        assert_eq!(summary.min_speedup, Some(0.5));
        assert!(!summary.vectorized_always_faster);
        Ok(())
    }

    #[test]
    fn unknown_operation_produces_no_report() -> Result<()> {
        let config = SweepConfig::new(1_000, 10_000, 2)?;
        let err = sweep(&config, "Division").unwrap_err();
        assert_eq!(err, BenchError::UnknownOperation("Division".to_string()));
        Ok(())
    }

    #[test]
    fn report_serializes_unbounded_speedup_as_null() -> Result<()> {
        let clock = ScriptedClock::new(vec![ms(2), ms(1), ms(2), Duration::ZERO]);
        let config = SweepConfig::new(1_000, 10_000, 2)?;
        let report = run_sweep(&config, Operation::Addition, &clock);

        let json = serde_json::to_value(&report)?;
        assert_eq!(json["operation"], "Addition");
        assert_eq!(json["config"]["count"], 2);
        assert_eq!(json["points"][0]["speedup"], 2.0);
        assert!(json["points"][1]["speedup"].is_null());
        Ok(())
    }
}
