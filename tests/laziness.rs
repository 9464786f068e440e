//! Laziness and pull-discipline checks: building a chain must do nothing,
//! and every stage must pull only what its downstream demands.

use lazyflow::testing::*;
use lazyflow::*;

#[test]
fn building_a_chain_pulls_nothing() {
    let probe = PullCounter::new();
    let _chain = from_vec(vec![1, 2, 3, 4, 5])
        .inspect(probe.probe())
        .map(|x| x * 2)
        .filter(|x| *x > 2)
        .skip(1)
        .take(2)
        .distinct();

    // No terminal operator has run.
    assert_eq!(probe.pulls(), 0);
}

#[test]
fn take_never_pulls_more_than_n_upstream_elements() -> anyhow::Result<()> {
    let probe = PullCounter::new();
    let out = from_vec(vec![1, 2, 3, 4, 5]).inspect(probe.probe()).take(2).to_vec()?;
    assert_sequences_equal(&out, &[1, 2]);
    assert_eq!(probe.pulls(), 2);

    probe.reset();
    // take(0) opens the traversal but never advances it.
    assert!(from_vec(vec![1, 2, 3]).inspect(probe.probe()).take(0).to_vec()?.is_empty());
    assert_eq!(probe.pulls(), 0);

    probe.reset();
    // More than the upstream has: pulls stop at exhaustion.
    assert_eq!(from_vec(vec![1, 2, 3]).inspect(probe.probe()).take(10).count()?, 3);
    assert_eq!(probe.pulls(), 3);
    Ok(())
}

#[test]
fn take_bounds_an_unbounded_source() -> anyhow::Result<()> {
    let out = from_producer(|| 1u64..).take(5).to_vec()?;
    assert_sequences_equal(&out, &[1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn skip_pulls_and_discards_the_prefix() -> anyhow::Result<()> {
    let probe = PullCounter::new();
    let out = from_vec(vec![1, 2, 3, 4]).inspect(probe.probe()).skip(2).to_vec()?;
    assert_sequences_equal(&out, &[3, 4]);
    // The skipped prefix still had to be pulled.
    assert_eq!(probe.pulls(), 4);
    Ok(())
}

#[test]
fn map_and_filter_run_per_pull_not_eagerly() -> anyhow::Result<()> {
    let map_probe = PullCounter::new();
    let out = from_vec(vec![1, 2, 3, 4, 5, 6])
        .inspect(map_probe.probe())
        .map(|x| x * 10)
        .filter(|x| *x >= 30)
        .take(2)
        .to_vec()?;

    assert_sequences_equal(&out, &[30, 40]);
    // Source pulls stop as soon as the second passing element appears.
    assert_eq!(map_probe.pulls(), 4);
    Ok(())
}

#[test]
fn each_traversal_restarts_the_source() -> anyhow::Result<()> {
    let probe = PullCounter::new();
    let p = from_vec(vec![1, 2, 3]).inspect(probe.probe());

    p.to_vec()?;
    assert_eq!(probe.pulls(), 3);
    p.to_vec()?;
    // Second drive pulled all three again from scratch.
    assert_eq!(probe.pulls(), 6);
    Ok(())
}

#[test]
fn stacked_probes_show_per_stage_pull_counts() -> anyhow::Result<()> {
    let before_skip = PullCounter::new();
    let after_skip = PullCounter::new();
    let out = from_vec(vec![1, 2, 3, 4, 5])
        .inspect(before_skip.probe())
        .skip(3)
        .inspect(after_skip.probe())
        .take(1)
        .to_vec()?;

    assert_sequences_equal(&out, &[4]);
    assert_eq!(before_skip.pulls(), 4); // 3 discarded + 1 yielded
    assert_eq!(after_skip.pulls(), 1);
    Ok(())
}
