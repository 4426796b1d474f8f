use crate::attraction::{MoveParams, update_candidate};
use crate::objective::ObjectiveDescriptor;
use crate::population::Population;
use crate::rng_pool::RngPool;
use crate::scheduler::GenerationScheduler;
use crate::shared_population::SharedPopulation;

/// Everything one generation's sweep reads; immutable for its duration.
pub(crate) struct Sweep<'a> {
    pub objective: &'a ObjectiveDescriptor,
    pub params: MoveParams,
    pub rng_pool: &'a RngPool,
    pub scheduler: &'a GenerationScheduler,
    pub generation: usize,
}

/// Double-buffered generation: every candidate reads the frozen `snapshot`
/// and the returned population is assembled from the updated rows.
///
/// Returns the next population and the number of evaluations performed.
pub(crate) fn step_generational(snapshot: &Population, sweep: &Sweep<'_>) -> (Population, usize) {
    let updates = sweep.scheduler.map_indexed(snapshot.len(), |i| {
        let mut rng = sweep.rng_pool.generation_stream(sweep.generation, i);
        update_candidate(
            i,
            snapshot,
            snapshot.position(i).to_owned(),
            snapshot.fitness()[i],
            sweep.objective,
            &sweep.params,
            &mut rng,
            |_, _| {},
        )
    });

    let moves = updates.iter().map(|u| u.moves).sum();
    log::trace!(
        "generation {}: moves per candidate {:?}",
        sweep.generation,
        updates.iter().map(|u| u.moves).collect::<Vec<_>>()
    );
    let rows = updates
        .into_iter()
        .map(|u| (u.position, u.fitness))
        .collect();
    (Population::from_rows(rows, snapshot.dimension()), moves)
}

/// In-place generation: every move is published to `shared` as soon as it
/// is evaluated. Returns the number of evaluations performed.
pub(crate) fn step_live(shared: &SharedPopulation, sweep: &Sweep<'_>) -> usize {
    let moves = sweep.scheduler.map_indexed(shared.len(), |i| {
        let mut rng = sweep.rng_pool.generation_stream(sweep.generation, i);
        let position = shared.row(i);
        let fitness = shared.fitness(i);
        update_candidate(
            i,
            shared,
            position,
            fitness,
            sweep.objective,
            &sweep.params,
            &mut rng,
            |x, fx| shared.publish(i, x, fx),
        )
        .moves
    });
    log::trace!("generation {}: moves per candidate {:?}", sweep.generation, moves);
    moves.into_iter().sum()
}
