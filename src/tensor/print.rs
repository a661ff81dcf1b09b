use crate::tensor::Tensor;
use std::fmt;

/// 只展示阶数不超过2的张量，更高阶只打印形状
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shape = self.shape();
        let values: Vec<f32> = self.data.iter().copied().collect();
        match *shape {
            [] => write!(f, "{:8.4}", values[0])?,
            [_] => write_row(f, &values)?,
            [rows, cols] => {
                write!(f, "[")?;
                for i in 0..rows {
                    if i > 0 {
                        write!(f, ",\n ")?;
                    }
                    write_row(f, &values[i * cols..(i + 1) * cols])?;
                }
                write!(f, "]")?;
            }
            _ => {
                return writeln!(
                    f,
                    "<对于阶数大于二（rank>2）的张量（形状：{shape:?}）无法展示具体数据>"
                )
            }
        }
        writeln!(f, "\n形状: {shape:?}")
    }
}

fn write_row(f: &mut fmt::Formatter, row: &[f32]) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value:8.4}")?;
    }
    write!(f, "]")
}
