//! Front-chain circle packing.
//!
//! Packs sibling circles around the origin so that no two overlap, then
//! computes the smallest circle enclosing the lot. The placement strategy is
//! the classic front-chain algorithm: the first three circles are placed
//! mutually tangent, every further circle is placed tangent to the pair of
//! chain neighbours closest to the centroid, and chain segments occluded by
//! the new circle are unlinked.

/// A positioned circle produced by the packer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedCircle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl PackedCircle {
    #[must_use]
    pub const fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }
}

fn intersects(a: PackedCircle, b: PackedCircle) -> bool {
    let dr = a.r + b.r - 1e-6;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

/// Positions `c` tangent to both `a` and `b`, on the side away from the
/// chain interior.
fn place(b: PackedCircle, a: PackedCircle, c: &mut PackedCircle) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d2 = dx * dx + dy * dy;
    if d2 > 0.0 {
        let a2 = (a.r + c.r) * (a.r + c.r);
        let b2 = (b.r + c.r) * (b.r + c.r);
        if a2 > b2 {
            let x = (d2 + b2 - a2) / (2.0 * d2);
            let y = (b2 / d2 - x * x).max(0.0).sqrt();
            c.x = b.x - x * dx - y * dy;
            c.y = b.y - x * dy + y * dx;
        } else {
            let x = (d2 + a2 - b2) / (2.0 * d2);
            let y = (a2 / d2 - x * x).max(0.0).sqrt();
            c.x = a.x + x * dx - y * dy;
            c.y = a.y + x * dy + y * dx;
        }
    } else {
        c.x = a.x + c.r;
        c.y = a.y;
    }
}

/// Squared distance from the origin to the weighted midpoint of a chain
/// node and its successor. The pair with the lowest score is the most
/// central spot to grow the pack from.
fn score(circles: &[PackedCircle], next: &[usize], node: usize) -> f64 {
    let a = circles[node];
    let b = circles[next[node]];
    let ab = a.r + b.r;
    let dx = (a.x * b.r + b.x * a.r) / ab;
    let dy = (a.y * b.r + b.y * a.r) / ab;
    dx * dx + dy * dy
}

/// Packs circles of the given radii around the origin without overlap,
/// preserving input order in the result. `padding` inflates every circle
/// during placement, leaving that much clearance between neighbours.
#[must_use]
pub fn pack_siblings(radii: &[f64], padding: f64) -> Vec<PackedCircle> {
    let n = radii.len();
    let mut circles: Vec<PackedCircle> = radii
        .iter()
        .map(|&r| PackedCircle::new(0.0, 0.0, r + padding / 2.0))
        .collect();

    if n > 1 {
        circles[0].x = -circles[1].r;
        circles[1].x = circles[0].r;
        circles[1].y = 0.0;
    }
    if n > 2 {
        let (b, a) = (circles[1], circles[0]);
        let mut c = circles[2];
        place(b, a, &mut c);
        circles[2] = c;
    }

    if n > 3 {
        // Doubly linked front chain over circle indices.
        let mut next = vec![0usize; n];
        let mut prev = vec![0usize; n];
        let (mut a, b, c) = (0usize, 1usize, 2usize);
        next[a] = b;
        prev[b] = a;
        next[b] = c;
        prev[c] = b;
        next[c] = a;
        prev[a] = c;

        let mut i = 3;
        while i < n {
            let b_node = next[a];
            let mut c = PackedCircle::new(0.0, 0.0, circles[i].r);
            place(circles[b_node], circles[a], &mut c);

            // Walk outward along the chain in both directions, by arc
            // length, looking for an intersection with the candidate.
            let mut j = next[b_node];
            let mut k = prev[a];
            let mut sj = circles[b_node].r;
            let mut sk = circles[a].r;
            let mut retry = false;
            loop {
                if sj <= sk {
                    if intersects(circles[j], c) {
                        next[a] = j;
                        prev[j] = a;
                        retry = true;
                        break;
                    }
                    sj += circles[j].r;
                    if j == k {
                        break;
                    }
                    j = next[j];
                } else {
                    if intersects(circles[k], c) {
                        a = k;
                        next[a] = b_node;
                        prev[b_node] = a;
                        retry = true;
                        break;
                    }
                    sk += circles[k].r;
                    if k == j {
                        break;
                    }
                    k = prev[k];
                }
            }
            if retry {
                continue;
            }

            // Insert the candidate between a and b.
            circles[i] = c;
            prev[i] = a;
            next[i] = b_node;
            next[a] = i;
            prev[b_node] = i;

            // Re-anchor on the most central chain pair.
            let mut best = a;
            let mut best_score = score(&circles, &next, a);
            let mut node = next[a];
            while node != b_node {
                let node_score = score(&circles, &next, node);
                if node_score < best_score {
                    best = node;
                    best_score = node_score;
                }
                node = next[node];
            }
            a = best;
            i += 1;
        }
    }

    // Center the pack on its enclosing circle and strip the padding.
    if let Some(enclosure) = enclose(&circles) {
        for circle in &mut circles {
            circle.x -= enclosure.x;
            circle.y -= enclosure.y;
        }
    }
    for circle in &mut circles {
        circle.r -= padding / 2.0;
    }
    circles
}

/// Smallest circle enclosing all of `circles` (Welzl's algorithm over a
/// basis of at most three circles). `None` for an empty slice.
#[must_use]
pub fn enclose(circles: &[PackedCircle]) -> Option<PackedCircle> {
    if circles.is_empty() {
        return None;
    }

    let mut basis: Vec<PackedCircle> = Vec::new();
    let mut e: Option<PackedCircle> = None;
    let mut i = 0;
    while i < circles.len() {
        let p = circles[i];
        match e {
            Some(enclosure) if encloses_weak(enclosure, p) => i += 1,
            _ => {
                basis = extend_basis(&basis, p);
                e = Some(enclose_basis(&basis));
                i = 0;
            }
        }
    }
    e
}

fn encloses_not(a: PackedCircle, b: PackedCircle) -> bool {
    let dr = a.r - b.r;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr < 0.0 || dr * dr < dx * dx + dy * dy
}

fn encloses_weak(a: PackedCircle, b: PackedCircle) -> bool {
    let dr = a.r - b.r + a.r.max(b.r).max(1.0) * 1e-9;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

fn encloses_weak_all(a: PackedCircle, basis: &[PackedCircle]) -> bool {
    basis.iter().all(|&b| encloses_weak(a, b))
}

fn extend_basis(basis: &[PackedCircle], p: PackedCircle) -> Vec<PackedCircle> {
    if encloses_weak_all(p, basis) {
        return vec![p];
    }

    for &b in basis {
        if encloses_not(p, b) && encloses_weak_all(enclose_basis2(b, p), basis) {
            return vec![b, p];
        }
    }

    for (i, &bi) in basis.iter().enumerate() {
        for &bj in &basis[i + 1..] {
            if encloses_not(enclose_basis2(bi, bj), p)
                && encloses_not(enclose_basis2(bi, p), bj)
                && encloses_not(enclose_basis2(bj, p), bi)
                && encloses_weak_all(enclose_basis3(bi, bj, p), basis)
            {
                return vec![bi, bj, p];
            }
        }
    }

    // Unreachable for consistent input: a basis of three circles always
    // admits one of the cases above.
    vec![p]
}

fn enclose_basis(basis: &[PackedCircle]) -> PackedCircle {
    match basis {
        [a] => *a,
        [a, b] => enclose_basis2(*a, *b),
        [a, b, c] => enclose_basis3(*a, *b, *c),
        _ => PackedCircle::new(0.0, 0.0, 0.0),
    }
}

fn enclose_basis2(a: PackedCircle, b: PackedCircle) -> PackedCircle {
    let x21 = b.x - a.x;
    let y21 = b.y - a.y;
    let r21 = b.r - a.r;
    let l = (x21 * x21 + y21 * y21).sqrt();
    PackedCircle::new(
        (a.x + b.x + x21 / l * r21) / 2.0,
        (a.y + b.y + y21 / l * r21) / 2.0,
        (l + a.r + b.r) / 2.0,
    )
}

fn enclose_basis3(a: PackedCircle, b: PackedCircle, c: PackedCircle) -> PackedCircle {
    let a2 = a.x - b.x;
    let a3 = a.x - c.x;
    let b2 = a.y - b.y;
    let b3 = a.y - c.y;
    let c2 = b.r - a.r;
    let c3 = c.r - a.r;
    let d1 = a.x * a.x + a.y * a.y - a.r * a.r;
    let d2 = d1 - b.x * b.x - b.y * b.y + b.r * b.r;
    let d3 = d1 - c.x * c.x - c.y * c.y + c.r * c.r;
    let ab = a3 * b2 - a2 * b3;
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - a.x;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - a.y;
    let yb = (a2 * c3 - a3 * c2) / ab;
    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (a.r + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - a.r * a.r;
    let r = -if qa.abs() > 1e-6 {
        (qb + (qb * qb - 4.0 * qa * qc).sqrt()) / (2.0 * qa)
    } else {
        qc / qb
    };
    PackedCircle::new(a.x + xa + xb * r, a.y + ya + yb * r, r)
}
