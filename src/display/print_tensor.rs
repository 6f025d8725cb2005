use std::fmt::{self, Display};

use crate::{display::config::PrintConfig, tensor::Tensor};

impl<T: Display> Tensor<T> {
    /// Renders the tensor with one bracket level per dimension, outermost first.
    pub fn render(&self, config: &PrintConfig) -> String {
        let mut out = String::new();

        if config.verbose {
            out.push_str(&format!("Tensor shape: {}\n", self.shape_string()));
            out.push_str(&format!("Number of dimensions: {}\n", self.rank()));
            out.push_str(&format!("Total elements: {}\n", self.size()));
        }

        if self.is_empty() {
            out.push_str(&config.empty_text);
        } else {
            render_block(&mut out, self.as_slice(), self.shape(), 0, config);
        }
        out
    }

    /// Renders every element as one bracketed list, ignoring shape.
    pub fn render_flat(&self, config: &PrintConfig) -> String {
        if self.is_empty() {
            return config.empty_text.clone();
        }

        let mut out = String::from("[");
        write_joined(&mut out, self.as_slice(), &config.separator);
        out.push(']');
        out
    }

    pub fn print(&self, verbose: bool) {
        let config = PrintConfig {
            verbose,
            ..Default::default()
        };
        println!("{}\n", self.render(&config));
    }

    pub fn print_flat(&self) {
        println!("{}\n", self.render_flat(&PrintConfig::default()));
    }
}

fn write_joined<T: Display>(out: &mut String, data: &[T], separator: &str) {
    for (i, x) in data.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&x.to_string());
    }
}

// `data` is non-empty, so every extent in `dims` is non-zero
fn render_block<T: Display>(
    out: &mut String,
    data: &[T],
    dims: &[usize],
    depth: usize,
    config: &PrintConfig,
) {
    out.push('[');
    if dims.len() <= 1 {
        write_joined(out, data, &config.separator);
    } else {
        let block = data.len() / dims[0];
        for (i, chunk) in data.chunks(block).enumerate() {
            if i > 0 {
                out.push_str(config.group_separator());
                out.push('\n');
                out.push_str(&" ".repeat((depth + 1) * config.indent));
            }
            render_block(out, chunk, &dims[1..], depth + 1, config);
        }
    }
    out.push(']');
}

impl<T: Display> Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_flat(&PrintConfig::default()))
    }
}
