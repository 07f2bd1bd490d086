use crate::paths::{ConfigError, RankeaPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use toml_edit::DocumentMut;

/// Backend de configuración por secciones (`[api]`, `[ui]`, …).
///
/// Cada consumidor define su struct de sección y la carga/guarda por nombre;
/// nadie ve el documento completo.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// Backend TOML sobre un único `rankea.toml`.
///
/// Lee con `toml` (serde plano) y escribe con `toml_edit`, para no pisar los
/// comentarios ni el formato que el usuario tenga en el resto del archivo.
pub struct TomlConfigBackend {
  paths: RankeaPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: RankeaPaths) -> Self {
    Self { paths }
  }

  /// Como `load_section`, pero un archivo o sección ausente devuelve el
  /// `Default` del tipo en vez de fallar. Útil en el primer arranque.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    let t: T = table
      .clone()
      .try_into()
      .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))?;

    Ok(t)
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    let t: T = table
      .clone()
      .try_into()
      .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))?;

    Ok(t)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // Documento actual (o vacío si todavía no existe).
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse config doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // Serializar la sección con toml_edit y colgarla de la raíz. El resto
    // del documento (comentarios, espacios, otras secciones) queda intacto.
    let section_doc = toml_edit::ser::to_document(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
    doc[section] = section_doc.as_item().clone();

    atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}

/// Escritura atómica: tmp + rename, para no dejar un config a medias si el
/// proceso muere en medio del write.
fn atomic_write_str(path: &Path, contents: &str) -> std::io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}
