use brawl_shared::{ControlVector, MapObservation};

use crate::policy::{Policy, PolicyError};

/// Replay a recorded observation trace through a policy.
///
/// Frames are fed in order, one per tick; the emitted control vectors are
/// returned in the same order. The first failing frame aborts the run with
/// its tick index.
pub fn run_trace(
    policy: &mut dyn Policy,
    frames: &[MapObservation],
) -> Result<Vec<ControlVector>, (usize, PolicyError)> {
    let mut actions = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        actions.push(policy.act(frame).map_err(|e| (i, e))?);
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::IdlePolicy;

    #[test]
    fn test_idle_trace() {
        let frames = vec![MapObservation::new(); 3];
        let mut policy = IdlePolicy;
        let actions = run_trace(&mut policy, &frames).unwrap();
        assert_eq!(actions.len(), 3);
        assert!(actions.iter().all(|a| *a == ControlVector::none()));
    }

    #[test]
    fn test_failure_reports_tick_index() {
        let frames = vec![MapObservation::new(); 2];
        let mut policy = crate::RuleBasedAgent::new();
        let (tick, _) = run_trace(&mut policy, &frames).unwrap_err();
        assert_eq!(tick, 0);
    }
}
