use disclat::lattice::IntegralLattice;
use disclat::matrix::SquareMatrix;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

// Work through the diagonal form diag(2, 4), whose discriminant group is
// Z/4 ⊕ Z/2. The logger makes the solver's trace and the transversal size
// checks visible.
fn main() {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let lattice =
        IntegralLattice::new(SquareMatrix::from_array([[2, 0], [0, 4]]))
            .unwrap();
    println!("form:");
    lattice.form().print_rows();
    println!("discriminant: {}", lattice.discriminant());

    let group = lattice.dual_group();
    println!("group order: {}", group.len());
    for e in group.elements() {
        println!("{e:?} has order {}", group.order_of(e));
    }

    let generators = group.generators().unwrap();
    println!("generators:");
    print!("{generators}");
}
