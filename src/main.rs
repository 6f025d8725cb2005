use clin::{PrintConfig, Tensor, TensorError};
use rand::{SeedableRng, rngs::StdRng};

/* Walkthrough of the public API
    Tensors are zero-filled on construction, sized by element count or by shape.
    Flat indexing accepts negative indices from the end; coordinate indexing does not.
    Median expects a sorted tensor, so sort first.
*/

fn main() -> Result<(), TensorError> {
    // - - - - Construction - - - -
    let empty = Tensor::<i32>::new();
    println!("Default tensor: {} (rank {})", empty, empty.rank());

    let linear = Tensor::<f64>::with_size(25);
    println!("Constructor with size as a parameter:");
    for element in &linear {
        print!("{} ", element);
    }
    println!();

    let mut cube = Tensor::<f32>::from_shape(&[3, 3, 3]);
    cube.fill_with(1.0);
    println!("Constructor with shape as a parameter:");
    cube.print(false);

    // - - - - Metadata and indexing - - - -
    println!(
        "size = {}, rank = {}, shape = {}",
        cube.size(),
        cube.rank(),
        cube.shape_string()
    );
    println!("index({{0, 1, 0}}) = {}", cube.index(&[0, 1, 0])?);

    let mut t = Tensor::<i32>::with_size(10);
    t.fill_with(1);
    t.set(3, 5)?;
    t.set(9, 13)?;
    println!("t = {}, t[-1] = {}", t, t.get(-1)?);

    match cube.get_at(&[3, 0, 0]) {
        Ok(v) => println!("unexpected value {}", v),
        Err(e) => println!("Out of range coordinate rejected: {}", e),
    }

    // - - - - Copy and move - - - -
    let mut copy = Tensor::new();
    copy.copy_from(&t);
    copy.set(0, 100)?;
    println!("original {} / copy {}", t, copy);

    let mut moved = Tensor::new();
    moved.move_from(&mut copy);
    println!("moved {} / source after move: {}", moved, copy);

    // - - - - Arithmetic - - - -
    let a = Tensor::from_vec(&[3], vec![1, 2, 3])?;
    let b = Tensor::from_vec(&[3], vec![4, 5, 6])?;
    println!("a + b = {}", a.try_add(&b)?);
    println!("a . b = {}", a.dot(&b)?);
    println!("a * 2 = {}", &a * 2);

    // - - - - Statistics and ordering - - - -
    let mut rng = StdRng::seed_from_u64(727);
    let mut samples = Tensor::random_uniform(&[2, 5], 0, 10, &mut rng)?;
    samples.print(true);
    println!(
        "sum = {}, mean = {}, min = {}, max = {}, mode = {:?}",
        samples.sum(),
        samples.mean()?,
        samples.min()?,
        samples.max()?,
        samples.mode()
    );

    samples.sort(false);
    println!("sorted: {}, median = {}", samples, samples.median()?);
    samples.sort(true);
    println!("sorted descending: {}", samples);
    samples.reverse();
    samples.print_flat();

    let config = PrintConfig {
        separator: " | ".to_string(),
        indent: 2,
        ..Default::default()
    }
    .build()?;
    println!("{}", samples.render(&config));

    Ok(())
}
