//! Command-line options.
//!
//! Flags use a single leading dash and positional values:
//!
//! | Flag | Values |
//! |------|--------|
//! | `-ka r g b` / `-kd r g b` / `-ks r g b` | material reflectance |
//! | `-sp p` | specular exponent |
//! | `-pl x y z r g b` | append a point light |
//! | `-dl x y z r g b` | append a directional light |
//! | `-no-display` | no window |
//! | `-save path` | write a PNG after the first render |
//! | `-toon` | toon banding |
//! | `-cube` | render the cube |
//!
//! Parsing never fails. Problems are collected as [`ArgError`] diagnostics and
//! the remaining flags still apply.

use std::path::PathBuf;

use glam::Vec3;

use crate::error::ArgError;
use crate::render::Shape;
use crate::scene::{Light, Scene};

/// Everything the command line configures.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub scene: Scene,
    pub shape: Shape,
    pub toon: bool,
    /// Open the interactive window.
    pub display: bool,
    /// Render once and write a PNG here.
    pub save_path: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scene: Scene::default(),
            shape: Shape::Sphere,
            toon: false,
            display: true,
            save_path: None,
        }
    }
}

/// Parsed options plus any diagnostics produced along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedArgs {
    pub options: Options,
    pub diagnostics: Vec<ArgError>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Flag {
    Ambient,
    Diffuse,
    Specular,
    Exponent,
    PointLight,
    DirectionalLight,
    NoDisplay,
    Save,
    Toon,
    Cube,
}

impl Flag {
    const ALL: [Flag; 10] = [
        Flag::Ambient,
        Flag::Diffuse,
        Flag::Specular,
        Flag::Exponent,
        Flag::PointLight,
        Flag::DirectionalLight,
        Flag::NoDisplay,
        Flag::Save,
        Flag::Toon,
        Flag::Cube,
    ];

    fn name(self) -> &'static str {
        match self {
            Flag::Ambient => "-ka",
            Flag::Diffuse => "-kd",
            Flag::Specular => "-ks",
            Flag::Exponent => "-sp",
            Flag::PointLight => "-pl",
            Flag::DirectionalLight => "-dl",
            Flag::NoDisplay => "-no-display",
            Flag::Save => "-save",
            Flag::Toon => "-toon",
            Flag::Cube => "-cube",
        }
    }

    /// Number of values following the flag.
    fn arity(self) -> usize {
        match self {
            Flag::Ambient | Flag::Diffuse | Flag::Specular => 3,
            Flag::PointLight | Flag::DirectionalLight => 6,
            Flag::Exponent | Flag::Save => 1,
            Flag::NoDisplay | Flag::Toon | Flag::Cube => 0,
        }
    }

    fn lookup(token: &str) -> Option<Flag> {
        Self::ALL.into_iter().find(|f| f.name() == token)
    }
}

/// Parses flag tokens (program name excluded).
pub fn parse_args<I, S>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<S> = args.into_iter().collect();
    let mut parsed = ParsedArgs::default();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_ref();
        let Some(flag) = Flag::lookup(token) else {
            parsed.diagnostics.push(ArgError::UnknownFlag(token.to_string()));
            i += 1;
            continue;
        };

        let values = &tokens[i + 1..];
        let arity = flag.arity();
        if values.len() < arity {
            parsed.diagnostics.push(ArgError::MissingValues {
                flag: flag.name(),
                expected: arity,
                found: values.len(),
            });
            break;
        }

        if let Err(e) = parsed.options.apply(flag, &values[..arity]) {
            parsed.diagnostics.push(e);
        }
        i += 1 + arity;
    }

    parsed
}

impl Options {
    fn apply<S: AsRef<str>>(&mut self, flag: Flag, values: &[S]) -> Result<(), ArgError> {
        let material = &mut self.scene.material;
        match flag {
            Flag::Ambient => material.ka = vec3(flag, values)?,
            Flag::Diffuse => material.kd = vec3(flag, values)?,
            Flag::Specular => material.ks = vec3(flag, values)?,
            Flag::Exponent => {
                let [p] = numbers::<_, 1>(flag, values)?;
                material.sp = p;
            }
            Flag::PointLight | Flag::DirectionalLight => {
                let [x, y, z, r, g, b] = numbers::<_, 6>(flag, values)?;
                let (pos_dir, color) = (Vec3::new(x, y, z), Vec3::new(r, g, b));
                self.scene.push_light(if flag == Flag::PointLight {
                    Light::point(pos_dir, color)
                } else {
                    Light::directional(pos_dir, color)
                });
            }
            Flag::NoDisplay => self.display = false,
            Flag::Save => self.save_path = Some(PathBuf::from(values[0].as_ref())),
            Flag::Toon => self.toon = true,
            Flag::Cube => self.shape = Shape::Cube,
        }
        Ok(())
    }
}

fn vec3<S: AsRef<str>>(flag: Flag, values: &[S]) -> Result<Vec3, ArgError> {
    let [x, y, z] = numbers::<_, 3>(flag, values)?;
    Ok(Vec3::new(x, y, z))
}

fn numbers<S: AsRef<str>, const N: usize>(flag: Flag, values: &[S]) -> Result<[f32; N], ArgError> {
    let mut out = [0.0; N];
    for (slot, value) in out.iter_mut().zip(values) {
        let value = value.as_ref();
        *slot = value.trim().parse().map_err(|_| ArgError::InvalidNumber {
            flag: flag.name(),
            value: value.to_string(),
        })?;
    }
    Ok(out)
}
