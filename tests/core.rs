use lazyflow::testing::*;
use lazyflow::*;

#[test]
fn from_vec_round_trips_in_order() -> anyhow::Result<()> {
    let source = vec![5, 1, 4, 1, 3];
    let out = from_vec(source.clone()).to_vec()?;
    assert_sequences_equal(&out, &source);
    Ok(())
}

#[test]
fn from_vec_empty_is_empty() -> anyhow::Result<()> {
    let out = from_vec(Vec::<i32>::new()).to_vec()?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn range_is_inclusive() -> anyhow::Result<()> {
    assert_sequences_equal(&range(1, 3).to_vec()?, &[1, 2, 3]);
    Ok(())
}

#[test]
fn range_with_custom_step() -> anyhow::Result<()> {
    assert_sequences_equal(&range_step(1, 5, 2).to_vec()?, &[1, 3, 5]);
    // A step that jumps past `end` stops before it.
    assert_sequences_equal(&range_step(1, 6, 2).to_vec()?, &[1, 3, 5]);
    Ok(())
}

#[test]
fn range_start_past_end_is_empty() -> anyhow::Result<()> {
    assert_eq!(range(3, 1).count()?, 0);
    assert_eq!(range_step(10, 5, 2).count()?, 0);
    Ok(())
}

#[test]
fn range_with_zero_step_is_unbounded() -> anyhow::Result<()> {
    // step = 0 repeats `start` forever; a take() keeps it finite.
    let out = range_step(7, 8, 0).take(4).to_vec()?;
    assert_sequences_equal(&out, &[7, 7, 7, 7]);
    Ok(())
}

#[test]
fn range_with_negative_step_descends_unbounded() -> anyhow::Result<()> {
    let out = range_step(3, 10, -2).take(3).to_vec()?;
    assert_sequences_equal(&out, &[3, 1, -1]);
    Ok(())
}

#[test]
fn range_stops_at_overflow() -> anyhow::Result<()> {
    let out = range_step(i64::MAX - 1, i64::MAX, 1).to_vec()?;
    assert_sequences_equal(&out, &[i64::MAX - 1, i64::MAX]);
    Ok(())
}

#[test]
fn from_producer_reopens_the_generator() -> anyhow::Result<()> {
    let naturals = from_producer(|| 0u32..);
    assert_sequences_equal(&naturals.take(3).to_vec()?, &[0, 1, 2]);
    // Second traversal restarts from the first element.
    assert_sequences_equal(&naturals.take(3).to_vec()?, &[0, 1, 2]);
    Ok(())
}

#[test]
fn map_fusion_equivalence() -> anyhow::Result<()> {
    let source = vec![1, 2, 3, 4];
    let chained = from_vec(source.clone()).map(|x| x + 1).map(|x| x * 3).to_vec()?;
    let fused = from_vec(source).map(|x| (x + 1) * 3).to_vec()?;
    assert_sequences_equal(&chained, &fused);
    Ok(())
}

#[test]
fn operators_do_not_mutate_the_receiver() -> anyhow::Result<()> {
    let base = from_vec(vec![1, 2, 3]);
    let mapped = base.map(|x| x * 10);
    let filtered = base.filter(|x| *x > 1);

    // The receiver still yields its original sequence, and each derived
    // pipeline sees the upstream independently.
    assert_sequences_equal(&base.to_vec()?, &[1, 2, 3]);
    assert_sequences_equal(&mapped.to_vec()?, &[10, 20, 30]);
    assert_sequences_equal(&filtered.to_vec()?, &[2, 3]);
    Ok(())
}

#[test]
fn same_pipeline_drives_twice_identically() -> anyhow::Result<()> {
    let p = range(1, 10).filter(|x| x % 3 != 0).map(|x| x * x);
    let a = p.to_vec()?;
    let b = p.to_vec()?;
    assert_sequences_equal(&a, &b);
    assert_eq!(p.count()?, a.len());
    Ok(())
}

#[test]
fn clones_share_the_sequence() -> anyhow::Result<()> {
    let p = range(1, 5);
    let q = p.clone();
    assert_sequences_equal(&p.to_vec()?, &q.to_vec()?);
    Ok(())
}

struct EvenSquares;

impl CompositeTransform<i64, i64> for EvenSquares {
    fn expand(&self, input: Pipeline<i64>) -> Pipeline<i64> {
        input.filter(|n| n % 2 == 0).map(|n| n * n)
    }
}

#[test]
fn composite_transform_expands_lazily() -> anyhow::Result<()> {
    let probe = PullCounter::new();
    let p = range(1, 100).inspect(probe.probe()).apply_composite(&EvenSquares);

    assert_eq!(probe.pulls(), 0);
    let out = p.take(2).to_vec()?;
    assert_sequences_equal(&out, &[4, 16]);
    assert_eq!(probe.pulls(), 4); // pulled 1..=4 to find two evens
    Ok(())
}
