use crate::internal::*;

/// BufReader for reading a file with a more descriptive message on error.
pub fn open(file: &Path) -> Result<impl Read> {
	log::info!("loading {}", file.to_string_lossy());
	Ok(BufReader::new(File::open(file).map_err(|err| anyhow!("open {:?}: {}", file, err))?))
}
