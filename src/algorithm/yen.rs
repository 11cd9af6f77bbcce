use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::path::Path;
use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::CandidatePool;
use crate::graph::{Graph, GraphView, NodeId, Weight};
use crate::{Error, Result};

/// Configuration for a k-shortest-paths query
#[derive(Debug, Clone, Copy)]
pub struct KspConfig {
    /// Stop after this many paths have been produced
    pub max_paths: Option<usize>,
    /// Reject graphs containing negative edge weights at construction
    pub validate_weights: bool,
}

impl Default for KspConfig {
    fn default() -> Self {
        Self {
            max_paths: None,
            validate_weights: true,
        }
    }
}

impl KspConfig {
    /// Default configuration: unbounded, with weight validation
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of paths the generator will produce
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = Some(max_paths);
        self
    }

    /// Enable or disable the non-negative weight check
    pub fn with_weight_validation(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeneratorState {
    /// No path requested yet
    Init,
    /// At least one path accepted, more may follow
    Running,
    /// No further loopless paths exist (or the cap was reached)
    Exhausted,
    /// A fatal error occurred; the query cannot continue
    Aborted,
}

/// Yen's k shortest loopless paths, produced one at a time
///
/// The first path is a plain Dijkstra search on the caller's graph. Each
/// following path is chosen among deviations from the previously accepted
/// one: for every spur node along it, the edges that accepted paths sharing
/// the same root take out of the spur node are disabled, the root nodes
/// before the spur are disabled, and the cheapest spur-to-target route is
/// searched on that view. The caller's graph is never modified; all edits go
/// through a [`GraphView`] owned by the generator and are undone after each
/// spur search.
///
/// Paths come out in non-decreasing weight order and no node sequence is
/// produced twice. Among pending candidates of equal weight, the
/// lexicographically smallest node sequence is chosen first.
#[derive(Debug)]
pub struct KShortestPaths<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    view: GraphView<'g, N, W, G>,
    source: N,
    target: N,
    accepted: Vec<Path<N, W>>,
    candidates: CandidatePool<N, W>,
    state: GeneratorState,
    config: KspConfig,
    dijkstra: Dijkstra,
}

impl<'g, N, W, G> KShortestPaths<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Creates a generator with the default configuration
    pub fn new(graph: &'g G, source: N, target: N) -> Result<Self> {
        Self::with_config(graph, source, target, KspConfig::default())
    }

    /// Creates a generator, checking that both endpoints exist and, unless
    /// disabled, that no edge has a negative weight
    pub fn with_config(graph: &'g G, source: N, target: N, config: KspConfig) -> Result<Self> {
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }
        if !graph.has_node(target) {
            return Err(Error::TargetNotFound(format!("{:?}", target)));
        }
        if config.validate_weights {
            validate_weights(graph)?;
        }

        Ok(KShortestPaths {
            view: GraphView::new(graph),
            source,
            target,
            accepted: Vec::new(),
            candidates: CandidatePool::new(),
            state: GeneratorState::Init,
            config,
            dijkstra: Dijkstra::new(),
        })
    }

    /// Start node of every produced path
    pub fn source(&self) -> N {
        self.source
    }

    /// End node of every produced path
    pub fn target(&self) -> N {
        self.target
    }

    /// Paths produced so far, in order
    pub fn accepted(&self) -> &[Path<N, W>] {
        &self.accepted
    }

    /// Candidates computed but not yet produced
    pub fn pending_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// True once `next_path` has reported that no further path exists
    pub fn is_exhausted(&self) -> bool {
        self.state == GeneratorState::Exhausted
    }

    /// Produces the next shortest loopless path.
    ///
    /// `Ok(None)` means no further path exists; every later call returns it
    /// as well. A disconnected source and target yield `Ok(None)` on the
    /// first call. After a fatal error every call returns
    /// [`Error::QueryAborted`].
    pub fn next_path(&mut self) -> Result<Option<Path<N, W>>> {
        match self.state {
            GeneratorState::Exhausted => return Ok(None),
            GeneratorState::Aborted => return Err(Error::QueryAborted),
            GeneratorState::Init | GeneratorState::Running => {}
        }

        if let Some(max_paths) = self.config.max_paths {
            if self.accepted.len() >= max_paths {
                log::debug!("Reached the cap of {} paths", max_paths);
                self.state = GeneratorState::Exhausted;
                return Ok(None);
            }
        }

        let outcome = match self.state {
            GeneratorState::Init => self.first_path(),
            _ => self.next_deviation(),
        };

        match outcome {
            Ok(Some(path)) => {
                log::debug!(
                    "Path #{} from {:?} to {:?}: {}",
                    self.accepted.len() + 1,
                    self.source,
                    self.target,
                    path
                );
                self.candidates.mark_seen(&path);
                self.accepted.push(path.clone());
                self.state = GeneratorState::Running;
                Ok(Some(path))
            }
            Ok(None) => {
                log::debug!(
                    "No more paths from {:?} to {:?} after {}",
                    self.source,
                    self.target,
                    self.accepted.len()
                );
                self.state = GeneratorState::Exhausted;
                Ok(None)
            }
            Err(err) => {
                log::error!("Aborting query from {:?} to {:?}: {}", self.source, self.target, err);
                if let Err(restore_err) = self.view.restore() {
                    log::error!("Overlay left inconsistent: {}", restore_err);
                }
                self.state = GeneratorState::Aborted;
                Err(err)
            }
        }
    }

    /// Collects up to `k` further paths
    pub fn take_paths(&mut self, k: usize) -> Result<Vec<Path<N, W>>> {
        let mut paths = Vec::with_capacity(k);
        while paths.len() < k {
            match self.next_path()? {
                Some(path) => paths.push(path),
                None => break,
            }
        }
        Ok(paths)
    }

    fn first_path(&self) -> Result<Option<Path<N, W>>> {
        self.dijkstra.shortest_path(self.view.base(), self.source, self.target)
    }

    fn next_deviation(&mut self) -> Result<Option<Path<N, W>>> {
        let previous = match self.accepted.last() {
            Some(path) => path.nodes().to_vec(),
            None => {
                return Err(Error::InvariantViolation(
                    "deviation requested before any path was accepted".to_string(),
                ))
            }
        };

        let base = self.view.base();
        let mut root_weight = W::zero();

        for i in 0..previous.len() - 1 {
            let spur_node = previous[i];
            let root_path = &previous[..=i];

            // Block every edge an accepted path takes out of this root
            for path in &self.accepted {
                if path.starts_with(root_path) {
                    if let Some(&next) = path.nodes().get(i + 1) {
                        self.view.remove_edge(spur_node, next);
                    }
                }
            }
            // Keep the spur path from looping back into the root
            for &node in &root_path[..i] {
                self.view.remove_node(node);
            }

            log::trace!(
                "Spur search from {:?} with root {:?} ({} edits)",
                spur_node,
                root_path,
                self.view.mutation_count()
            );
            let spur = self.dijkstra.shortest_path(&self.view, spur_node, self.target);
            self.view.restore()?;

            if let Some(spur_path) = spur? {
                let candidate = join_root_and_spur(root_path, root_weight, spur_path)?;
                if self.candidates.insert(candidate) {
                    log::trace!("New candidate through spur {:?}", spur_node);
                }
            }

            let hop = base.edge_weight(previous[i], previous[i + 1]).ok_or_else(|| {
                Error::InvariantViolation(format!(
                    "accepted path uses missing edge {:?} -> {:?}",
                    previous[i],
                    previous[i + 1]
                ))
            })?;
            root_weight = root_weight.checked_sum(hop).ok_or_else(|| {
                Error::WeightOverflow(format!("root path {:?} plus {:?}", root_path, hop))
            })?;
        }

        Ok(self.candidates.pop_min())
    }
}

/// Concatenates the root (minus the spur node) with the spur path
fn join_root_and_spur<N, W>(root_path: &[N], root_weight: W, spur_path: Path<N, W>) -> Result<Path<N, W>>
where
    N: NodeId,
    W: Weight,
{
    let spur_node = root_path[root_path.len() - 1];
    if spur_path.source() != spur_node {
        return Err(Error::InvariantViolation(format!(
            "spur path starts at {:?}, expected {:?}",
            spur_path.source(),
            spur_node
        )));
    }

    let weight = root_weight.checked_sum(spur_path.weight()).ok_or_else(|| {
        Error::WeightOverflow(format!(
            "root {:?} weighing {:?} plus spur path {}",
            root_path, root_weight, spur_path
        ))
    })?;
    let mut nodes = root_path[..root_path.len() - 1].to_vec();
    nodes.extend(spur_path.into_nodes());

    let candidate = Path::new(nodes, weight)
        .ok_or_else(|| Error::InvariantViolation("empty candidate path".to_string()))?;
    if !candidate.is_loopless() {
        return Err(Error::InvariantViolation(format!("candidate repeats a node: {}", candidate)));
    }
    Ok(candidate)
}

fn validate_weights<N, W, G>(graph: &G) -> Result<()>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    for from in graph.nodes() {
        for (to, weight) in graph.neighbors(from) {
            if weight < W::zero() {
                return Err(Error::NegativeWeight {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                    weight: format!("{:?}", weight),
                });
            }
        }
    }
    Ok(())
}

impl<'g, N, W, G> Iterator for KShortestPaths<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    type Item = Result<Path<N, W>>;

    /// Yields paths until exhaustion. A fatal error is yielded once, then
    /// iteration ends.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_path() {
            Ok(Some(path)) => Some(Ok(path)),
            Ok(None) | Err(Error::QueryAborted) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// Computes up to `k` shortest loopless paths from `source` to `target`
pub fn k_shortest_paths<N, W, G>(graph: &G, source: N, target: N, k: usize) -> Result<Vec<Path<N, W>>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    let config = KspConfig::new().with_max_paths(k);
    KShortestPaths::with_config(graph, source, target, config)?.collect()
}
