//! Weighted token lattice with Viterbi decoding.
//!
//! A [`TokenLattice`] is built fresh for one sentence, populated with
//! candidate subword edges by an external scoring model, consumed by one
//! Viterbi pass and then discarded. Edges live in a node arena addressed by
//! index; the begin/end buckets and predecessor links hold arena indices, so
//! reading a node out of the arena copies it by value and a finalized path
//! can never be invalidated by later mutation of the arena.
//!
//! "No complete path" is an expected outcome, not an error: `viterbi`
//! returns an empty sequence and callers decide on a fallback.

/// One edge of the lattice: a candidate token spanning
/// `[pos, pos + length)` in code points.
///
/// `token_id`, `node_id`, `pos`, `length` and `score` are immutable after
/// insertion; the forward pass only ever rewrites `prev` and
/// `backtrace_score`.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeNode {
    pub token_id: u32,
    pub node_id: usize,
    pub pos: usize,
    pub length: usize,
    pub score: f64,
    prev: Option<usize>,
    backtrace_score: f64,
}

impl LatticeNode {
    fn new(token_id: u32, node_id: usize, pos: usize, length: usize, score: f64) -> Self {
        LatticeNode {
            token_id,
            node_id,
            pos,
            length,
            score,
            prev: None,
            backtrace_score: 0.0,
        }
    }
}

/// A lattice over the code-point positions of one sentence.
#[derive(Debug)]
pub struct TokenLattice {
    chars: Vec<char>,
    len: usize,
    nodes: Vec<LatticeNode>,
    begin_nodes: Vec<Vec<usize>>,
    end_nodes: Vec<Vec<usize>>,
}

impl TokenLattice {
    /// Creates a lattice for `sentence`, bounded by a BOS sentinel in
    /// end-bucket 0 and an EOS sentinel in begin-bucket `len`.
    pub fn new(sentence: &str, bos_token_id: Option<u32>, eos_token_id: Option<u32>) -> Self {
        let chars: Vec<char> = sentence.chars().collect();
        let len = chars.len();
        let mut begin_nodes = vec![Vec::new(); len + 1];
        let mut end_nodes = vec![Vec::new(); len + 1];

        let bos = LatticeNode::new(bos_token_id.unwrap_or(0), 0, 0, 0, 0.0);
        let eos = LatticeNode::new(eos_token_id.unwrap_or(0), 1, len, 0, 0.0);
        end_nodes[0].push(0);
        begin_nodes[len].push(1);

        TokenLattice {
            chars,
            len,
            nodes: vec![bos, eos],
            begin_nodes,
            end_nodes,
        }
    }

    /// Sentence length in code points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sentence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Registers one candidate edge spanning `[pos, pos + length)` with an
    /// externally supplied score.
    ///
    /// Node ids are assigned monotonically at insertion and never reused.
    /// Overlapping, duplicate or zero edges are all permitted; the lattice
    /// imposes no coverage constraint.
    ///
    /// # Panics
    /// Panics if `pos + length` exceeds the sentence length.
    pub fn insert(&mut self, pos: usize, length: usize, score: f64, token_id: u32) {
        assert!(
            pos + length <= self.len,
            "edge [{pos}, {}) exceeds sentence length {}",
            pos + length,
            self.len
        );
        let node_id = self.nodes.len();
        let node = LatticeNode::new(token_id, node_id, pos, length, score);
        self.begin_nodes[pos].push(node_id);
        self.end_nodes[pos + length].push(node_id);
        self.nodes.push(node);
    }

    /// Computes the maximum-total-score path from BOS to EOS and returns its
    /// edges in left-to-right order, sentinels excluded.
    ///
    /// Returns an empty sequence when no complete path exists: some position
    /// has no begin-edges, or an edge finds no predecessor in its end
    /// bucket. Ties keep the first-found predecessor; only a strictly
    /// greater score replaces the incumbent.
    pub fn viterbi(&mut self) -> Vec<LatticeNode> {
        for pos in 0..=self.len {
            if self.begin_nodes[pos].is_empty() {
                return Vec::new();
            }
            for r in 0..self.begin_nodes[pos].len() {
                let rnode = self.begin_nodes[pos][r];
                self.nodes[rnode].prev = None;
                let mut best_score = 0.0;
                let mut best_node: Option<usize> = None;
                for &lnode in &self.end_nodes[pos] {
                    let score = self.nodes[lnode].backtrace_score + self.nodes[rnode].score;
                    if best_node.is_none() || score > best_score {
                        best_node = Some(lnode);
                        best_score = score;
                    }
                }
                match best_node {
                    Some(lnode) => {
                        self.nodes[rnode].prev = Some(lnode);
                        self.nodes[rnode].backtrace_score = best_score;
                    }
                    None => return Vec::new(),
                }
            }
        }

        // Walk back from the EOS sentinel, excluding both sentinels. The
        // pushed nodes are value snapshots out of the arena.
        let eos = self.begin_nodes[self.len][0];
        let mut cursor = match self.nodes[eos].prev {
            Some(prev) => prev,
            None => return Vec::new(),
        };
        let mut results = Vec::new();
        while let Some(prev) = self.nodes[cursor].prev {
            results.push(self.nodes[cursor].clone());
            cursor = prev;
        }
        results.reverse();
        results
    }

    /// Returns the substring of the sentence covered by `node`.
    pub fn piece(&self, node: &LatticeNode) -> String {
        self.chars[node.pos..node.pos + node.length].iter().collect()
    }

    /// Surface strings of the best path.
    pub fn tokens(&mut self) -> Vec<String> {
        let nodes = self.viterbi();
        nodes.iter().map(|node| self.piece(node)).collect()
    }

    /// Token identifiers of the best path.
    pub fn token_ids(&mut self) -> Vec<u32> {
        let nodes = self.viterbi();
        nodes.iter().map(|node| node.token_id).collect()
    }
}
