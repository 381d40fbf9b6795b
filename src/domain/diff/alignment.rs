use std::fmt::Display;
use tracing::{debug, trace};

/// One step of an alignment between two sequences.
///
/// Every element of the left sequence appears in exactly one `Match`, `Delete` or
/// `Replace`, and every element of the right sequence in exactly one `Match`,
/// `Insert` or `Replace`, in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Match { left: T, right: T },
    Delete { left: T },
    Insert { right: T },
    Replace { left: T, right: T },
}

impl<T> Edit<T> {
    /// Number of left elements consumed by this step.
    pub fn left_len(&self) -> usize {
        match self {
            Edit::Match { .. } | Edit::Delete { .. } | Edit::Replace { .. } => 1,
            Edit::Insert { .. } => 0,
        }
    }

    /// Number of right elements consumed by this step.
    pub fn right_len(&self) -> usize {
        match self {
            Edit::Match { .. } | Edit::Insert { .. } | Edit::Replace { .. } => 1,
            Edit::Delete { .. } => 0,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Edit::Match { .. })
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edit::Match { left, .. } => write!(f, " {left}"),
            Edit::Delete { left } => write!(f, "-{left}"),
            Edit::Insert { right } => write!(f, "+{right}"),
            Edit::Replace { left, right } => write!(f, "~{left} => {right}"),
        }
    }
}

/// The non-matching moves available at a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Delete,
    Insert,
    Replace,
}

/// Costs of the three predecessor cells of `(i, j)`:
/// `delete` is `(i - 1, j)`, `insert` is `(i, j - 1)` and `replace` is `(i - 1, j - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbours {
    pub delete: usize,
    pub insert: usize,
    pub replace: usize,
}

impl Neighbours {
    pub fn min(&self) -> usize {
        self.delete.min(self.insert).min(self.replace)
    }
}

/// Decides which move a cell records when its two elements differ.
///
/// The cost of such a cell is always `1 + neighbours.min()`; the policy only picks
/// the move that backtracking will follow, which is what makes the reported
/// differences (not their count) deterministic.
pub trait TieBreak {
    fn resolve(&self, neighbours: Neighbours) -> Change;
}

/// Dynamic programming state of one cell: its cost and the move that reached it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Origin,
    Match(usize),
    Delete(usize),
    Insert(usize),
    Replace(usize),
}

impl Cell {
    pub fn cost(&self) -> usize {
        match *self {
            Cell::Origin => 0,
            Cell::Match(cost) | Cell::Delete(cost) | Cell::Insert(cost) | Cell::Replace(cost) => {
                cost
            }
        }
    }

    fn from_change(change: Change, cost: usize) -> Self {
        match change {
            Change::Delete => Cell::Delete(cost),
            Change::Insert => Cell::Insert(cost),
            Change::Replace => Cell::Replace(cost),
        }
    }
}

/// `(m + 1) x (n + 1)` table of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    columns: usize,
    cells: Vec<Cell>,
}

impl CostTable {
    fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            cells: vec![Cell::Origin; rows * columns],
        }
    }

    pub fn get(&self, i: usize, j: usize) -> Cell {
        self.cells[i * self.columns + j]
    }

    fn set(&mut self, i: usize, j: usize, cell: Cell) {
        self.cells[i * self.columns + j] = cell;
    }

    /// Cost of the bottom-right cell, i.e. the edit distance.
    pub fn distance(&self) -> usize {
        self.cells.last().map(Cell::cost).unwrap_or_default()
    }
}

pub trait DiffAlgorithm<'d, T> {
    type Table;
    type EditScript;

    fn compute_cost_table(&self) -> Self::Table;
    fn backtrack(&self, table: &Self::Table) -> Self::EditScript;

    fn diff(&self) -> Self::EditScript {
        let table = self.compute_cost_table();
        self.backtrack(&table)
    }
}

/// Minimum edit distance alignment of two slices.
///
/// Equal elements (according to `eq`) always produce a `Match`; for differing
/// elements the tie-break policy chooses among delete, insert and replace.
pub struct EditDistance<'d, T, P> {
    a: &'d [T],
    b: &'d [T],
    policy: P,
    eq: fn(&T, &T) -> bool,
}

impl<'d, T: PartialEq, P: TieBreak> EditDistance<'d, T, P> {
    pub fn new(a: &'d [T], b: &'d [T], policy: P) -> Self {
        Self::with_eq(a, b, policy, T::eq)
    }
}

impl<'d, T, P: TieBreak> EditDistance<'d, T, P> {
    pub fn with_eq(a: &'d [T], b: &'d [T], policy: P, eq: fn(&T, &T) -> bool) -> Self {
        Self { a, b, policy, eq }
    }
}

impl<'d, T, P: TieBreak> DiffAlgorithm<'d, T> for EditDistance<'d, T, P> {
    type Table = CostTable;
    type EditScript = Vec<Edit<&'d T>>;

    fn compute_cost_table(&self) -> Self::Table {
        let (m, n) = (self.a.len(), self.b.len());
        let mut table = CostTable::new(m + 1, n + 1);

        for i in 1..=m {
            table.set(i, 0, Cell::Delete(i));
        }
        for j in 1..=n {
            table.set(0, j, Cell::Insert(j));
        }

        for i in 1..=m {
            for j in 1..=n {
                let cell = if (self.eq)(&self.a[i - 1], &self.b[j - 1]) {
                    Cell::Match(table.get(i - 1, j - 1).cost())
                } else {
                    let neighbours = Neighbours {
                        delete: table.get(i - 1, j).cost(),
                        insert: table.get(i, j - 1).cost(),
                        replace: table.get(i - 1, j - 1).cost(),
                    };
                    Cell::from_change(self.policy.resolve(neighbours), neighbours.min() + 1)
                };
                table.set(i, j, cell);
            }
        }

        table
    }

    fn backtrack(&self, table: &Self::Table) -> Self::EditScript {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut script = Vec::with_capacity(i.max(j));

        loop {
            let edit = match table.get(i, j) {
                Cell::Origin => break,
                Cell::Match(_) => {
                    i -= 1;
                    j -= 1;
                    Edit::Match {
                        left: &self.a[i],
                        right: &self.b[j],
                    }
                }
                Cell::Delete(_) => {
                    i -= 1;
                    Edit::Delete { left: &self.a[i] }
                }
                Cell::Insert(_) => {
                    j -= 1;
                    Edit::Insert { right: &self.b[j] }
                }
                Cell::Replace(_) => {
                    i -= 1;
                    j -= 1;
                    Edit::Replace {
                        left: &self.a[i],
                        right: &self.b[j],
                    }
                }
            };
            script.push(edit);
        }

        script.reverse();
        script
    }

    fn diff(&self) -> Self::EditScript {
        let table = self.compute_cost_table();
        debug!(
            left = self.a.len(),
            right = self.b.len(),
            distance = table.distance(),
            "computed cost table"
        );

        let script = self.backtrack(&table);
        trace!(steps = script.len(), "backtracked edit script");
        script
    }
}
