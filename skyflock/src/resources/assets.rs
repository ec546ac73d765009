//! Find and load asset files (meshes, textures).
use super::internal::*;

// Path to the `assets/` directory.
// Typestate pattern ensures correct use.
#[derive(Clone)]
pub struct AssetsDir(PathBuf);

impl AssetsDir {
	/// Find the absolute path of the assets directory.
	/// Search in the current working directory and the executable's directory.
	pub fn find() -> Result<Self> {
		const ASSETS: &str = "assets";

		if let Ok(dir) = std::env::current_dir() {
			log::info!("searching for assets in working directory: {}", dir.to_string_lossy());
			let abs = dir.join(ASSETS);
			if abs.exists() {
				return Ok(Self(abs));
			}
		}

		let exe = std::env::current_exe()?;
		if let Some(dir) = exe.parent() {
			log::info!("searching for assets in executable directory: {}", dir.to_string_lossy());
			let abs = dir.join(ASSETS);
			if abs.exists() {
				return Ok(Self(abs));
			}
		}

		Err(anyhow!("assets directory not found.\nBe sure to run this program from a directory that contains 'assets/'."))
	}

	// find an `obj` or `obj.gz` file in the assets directory.
	pub fn find_obj(&self, base: &str) -> Result<PathBuf> {
		Self::find_asset(&self.0.join("obj"), base, &["obj", "obj.gz"])
	}

	/// Find absolute path to a texture file with `base` name. E.g.:
	///   "flamingo" => "/path/to/textures/flamingo.png"
	fn find_texture(&self, base: &str) -> Result<PathBuf> {
		Self::find_asset(&self.textures_dir(), base, &["png", "jpg", "jpeg"])
	}

	/// Find the absolute path of an asset file. E.g.:
	///   find_asset("/path/to/assets/textures", "flamingo", &["png", "jpg"])? =>  /path/to/assets/textures/flamingo.jpg
	fn find_asset(dir: &Path, base: &str, extensions: &[&str]) -> Result<PathBuf> {
		for ext in extensions {
			let file = dir.join(base.to_owned() + "." + ext); // note: do not use .with_extension, *replaces* extension.
			if file.exists() {
				return Ok(file);
			}
		}
		Err(anyhow!("asset not found: {:?} with extension {}", dir.join(base), extensions.join(", ")))
	}

	pub fn settings_file(&self, file: &str) -> Result<PathBuf> {
		Ok(self.0.parent().ok_or(anyhow!("assets parent directory not found"))?.join(file))
	}

	fn textures_dir(&self) -> PathBuf {
		self.0.join("textures")
	}
}

// Load a wavefront file (no extension, e.g. "flamingo_fly_0") from disk, upload to GPU as Vertex Array.
pub fn upload_wavefront(ctx: &GraphicsCtx, assets: &AssetsDir, base: &str) -> Result<VAO> {
	Ok(ctx.upload_meshbuffer(&load_wavefront_merged(assets, base)?))
}

/// Find and load a wavefront OBJ file by base name (no extension).
/// Searches `{assets}/obj` for `{base}.obj`, `{base}.obj.gz`.
/// All Objects (in the wavefront sense, e.g. 'Body', 'Wing.L') are merged into one.
/// Not cached.
pub fn load_wavefront_merged(assets: &AssetsDir, base: &str) -> Result<MeshBuffer> {
	convert_wavefront(&parse_wavefront(assets, base)?)
}

/// Find and parse a wavefront file by name (no extension).
fn parse_wavefront(assets: &AssetsDir, base: &str) -> Result<wavefrontobj::ObjSet> {
	let path = assets.find_obj(base)?;
	match path.extension().unwrap_or_default().to_string_lossy().as_ref() {
		"obj" => wavefrontobj::parse(open(&path)?),
		"gz" => wavefrontobj::parse(GzDecoder::new(open(&path)?)),
		_ => Err(anyhow!("unsupported obj file format: {}", path.to_string_lossy())),
	}
}

pub fn upload_image(ctx: &GraphicsCtx, assets: &AssetsDir, base: &str, sampling: &TextureOpts) -> Result<Texture> {
	Ok(ctx.upload_image_mip(&load_image(assets, base)?, sampling))
}

/// Find and load an image file by base name (no extension, e.g. "flamingo").
/// Searches `{assets}/textures` for `{base}.png`, `{base}.jpg`, `{base}.jpeg`.
/// Not cached.
pub fn load_image(assets: &AssetsDir, base: &str) -> Result<DynamicImage> {
	let path = assets.find_texture(base)?;
	Ok(image::open(&path)?)
}

// Convert a wavefront object set to Vertices + Indices that can be uploaded to the GPU.
fn convert_wavefront(obj_set: &wavefrontobj::ObjSet) -> Result<MeshBuffer> {
	let mut buf = MeshBuffer::new();
	for face in obj_set.iter_faces() {
		if face.len() != 3 {
			return Err(anyhow!("only triangular faces supported, got face with {} vertices", face.len()));
		}
		for v in face {
			buf.push(Vertex {
				position: v.position,
				normal: v.normal,
				texcoords: flip_v(v.texture),
			})
		}
	}
	Ok(buf)
}

// Flip the orientation of the V texture coordinate.
// Used to convert from Blender's "up" definition to ours.
fn flip_v(t: vec2) -> vec2 {
	vec2(t.x(), 1.0 - t.y())
}
