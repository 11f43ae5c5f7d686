use disclat::lattice::IntegralLattice;
use disclat::matrix::SquareMatrix;

// The D4 root lattice: positive definite, full of roots, discriminant group
// Z/2 ⊕ Z/2.
fn main() {
    let lattice = IntegralLattice::new(SquareMatrix::from_array([
        [2, -1, 0, 0],
        [-1, 2, -1, -1],
        [0, -1, 2, 0],
        [0, -1, 0, 2],
    ]))
    .unwrap();

    println!("rank: {}", lattice.rank());
    println!("discriminant: {}", lattice.discriminant());
    println!("symmetric: {}", lattice.form().is_symmetric());
    println!("positive definite: {}", lattice.form().is_positive_definite());
    println!("has a root: {}", lattice.has_root());
    println!("discriminant factors: {:?}", lattice.prime_factors());

    let generators = lattice.dual_group().generators().unwrap();
    println!("generators:");
    print!("{generators}");
}
