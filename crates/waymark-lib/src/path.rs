use crate::solver::ShortestPaths;

/// Expand the predecessor matrix into the full `start → goal` location sequence.
///
/// The result always begins with `start` and ends with `goal`; `start == goal`
/// yields a single-element path. Reachability is not checked here: an
/// unreachable pair has no predecessor and expands to `[start, goal]`.
pub fn reconstruct_path(paths: &ShortestPaths, start: usize, goal: usize) -> Vec<usize> {
    if start == goal {
        return vec![start];
    }

    let mut path = Vec::with_capacity(2);
    path.push(start);
    expand_intermediates(paths, start, goal, &mut path);
    path.push(goal);
    path
}

fn expand_intermediates(paths: &ShortestPaths, from: usize, to: usize, out: &mut Vec<usize>) {
    if from == to {
        return;
    }
    let Some(via) = paths.predecessor(from, to) else {
        return;
    };
    expand_intermediates(paths, from, via, out);
    out.push(via);
    expand_intermediates(paths, via, to, out);
}
