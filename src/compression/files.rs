use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::codec::HuffmanCodec;
use crate::error::Result;

/// Where the packed form of `input` goes by default: same stem, `.bin` extension.
pub fn output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension("bin")
}

/// Compress the file at `input` into `output`. Returns the session, which is needed to
/// decompress the file again, along with the original bytes.
pub fn compress_file(input: &Path, output: &Path) -> Result<(HuffmanCodec, Vec<u8>)> {
    let data = fs::read(input)?;
    let codec = HuffmanCodec::from_data(&data)?;
    let packed = codec.compress(&data)?;
    fs::write(output, &packed)?;

    info!(
        "Compressed {} ({} bytes) into {} ({} bytes).",
        input.display(),
        data.len(),
        output.display(),
        packed.len()
    );
    Ok((codec, data))
}

/// Read a packed file and decompress it with the session that wrote it.
pub fn decompress_file(codec: &HuffmanCodec, input: &Path) -> Result<Vec<u8>> {
    let packed = fs::read(input)?;
    let data = codec.decompress(&packed)?;
    info!(
        "Decompressed {} ({} bytes) into {} bytes.",
        input.display(),
        packed.len(),
        data.len()
    );
    Ok(data)
}

#[cfg(test)]
mod test {
    use super::output_path;
    use std::path::Path;

    #[test]
    fn output_path_test() {
        assert_eq!(output_path("data/sample.txt"), Path::new("data/sample.bin"));
        assert_eq!(output_path("notes"), Path::new("notes.bin"));
    }
}
