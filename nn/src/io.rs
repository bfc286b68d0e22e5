use crate::layer::{Dense, Layer, Relu};
use crate::model::Network;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use ndarray::{Array1, Array2};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

const MAGIC: &[u8; 4] = b"AINN";

const TAG_DENSE: u8 = 0;
const TAG_RELU: u8 = 1;

#[derive(Debug, Error)]
pub enum ModelIoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a model file (bad magic)")]
    BadMagic,
    #[error("unknown layer tag {0}")]
    UnknownLayer(u8),
    #[error("bad tensor shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Writes a network as magic, layer count, then per-layer tag and
/// little-endian f32 parameters
pub fn save(network: &Network, path: &Path) -> Result<(), ModelIoError> {
    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(MAGIC)?;
    writer.write_u32::<LittleEndian>(network.layers().len() as u32)?;

    for layer in network.layers() {
        match layer {
            Layer::Dense(dense) => {
                writer.write_u8(TAG_DENSE)?;
                writer.write_u32::<LittleEndian>(dense.inputs() as u32)?;
                writer.write_u32::<LittleEndian>(dense.outputs() as u32)?;
                for &value in dense.weight.iter() {
                    writer.write_f32::<LittleEndian>(value)?;
                }
                for &value in dense.bias.iter() {
                    writer.write_f32::<LittleEndian>(value)?;
                }
            }
            Layer::Relu(_) => writer.write_u8(TAG_RELU)?,
        }
    }

    writer.flush()?;
    Ok(())
}

/// Reads a network written by `save`
pub fn load(path: &Path) -> Result<Network, ModelIoError> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(ModelIoError::BadMagic);
    }

    let count = reader.read_u32::<LittleEndian>()? as usize;
    let mut layers = Vec::with_capacity(count);

    for _ in 0..count {
        match reader.read_u8()? {
            TAG_DENSE => {
                let inputs = reader.read_u32::<LittleEndian>()? as usize;
                let outputs = reader.read_u32::<LittleEndian>()? as usize;

                let mut weight = vec![0.0f32; inputs * outputs];
                reader.read_f32_into::<LittleEndian>(&mut weight)?;
                let mut bias = vec![0.0f32; outputs];
                reader.read_f32_into::<LittleEndian>(&mut bias)?;

                layers.push(Layer::from(Dense::from_parts(
                    Array2::from_shape_vec((inputs, outputs), weight)?,
                    Array1::from_vec(bias),
                )));
            }
            TAG_RELU => layers.push(Layer::from(Relu::new())),
            tag => return Err(ModelIoError::UnknownLayer(tag)),
        }
    }

    Ok(Network::new(layers))
}
