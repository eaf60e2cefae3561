//! Fits a single ReLU neuron `relu(w * x + b)` to a few points with plain
//! gradient descent, rebuilding the graph every step.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::creation::uniform;
use scalargrad_core::{Scalar, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(0);
    let mut w = uniform(&mut rng, 0.1, 1.0)?.value();
    let mut b = uniform(&mut rng, 0.1, 1.0)?.value();

    let data = [(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
    let learning_rate = 0.02;

    for step in 0..200 {
        let w_node = Scalar::new(w);
        let b_node = Scalar::new(b);

        let loss: Scalar = data
            .iter()
            .map(|&(x, y)| {
                let prediction = (&w_node * x + &b_node).relu();
                let diff = prediction - y;
                &diff * &diff
            })
            .sum();

        loss.backward()?;
        w -= learning_rate * w_node.grad();
        b -= learning_rate * b_node.grad();

        if step % 50 == 0 {
            println!("step {:>3}: loss = {:.6}", step, loss.value());
        }
    }

    println!("w = {:.4}, b = {:.4}", w, b);
    Ok(())
}
