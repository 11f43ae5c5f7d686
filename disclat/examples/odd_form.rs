use disclat::lattice::IntegralLattice;
use disclat::matrix::SquareMatrix;

// A dense 3×3 form with discriminant 77. The group is cyclic, so a single
// generator of order 77 covers it, but the enumeration has to wade through
// 77³ candidate vectors to find out.
fn main() {
    let lattice = IntegralLattice::new(SquareMatrix::from_array([
        [3, 1, 1],
        [1, 7, 8],
        [1, 8, 13],
    ]))
    .unwrap();
    println!("discriminant: {}", lattice.discriminant());

    let group = lattice.dual_group();
    println!("group order: {}", group.len());
    println!("largest element order: {}", group.max_order(group.elements()));

    let generators = group.generators().unwrap();
    println!("generators:");
    print!("{generators}");
}
