use naga::front::wgsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{Binding, Handle, Module, ShaderStage, Type, TypeInner};
use std::collections::BTreeMap;

/// Errors from building a shader program. Each carries the program label
/// and the compiler diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("{program}: vertex shader failed to compile\n{log}")]
    VertexCompile { program: String, log: String },
    #[error("{program}: fragment shader failed to compile\n{log}")]
    FragmentCompile { program: String, log: String },
    #[error("{program}: program failed to link\n{log}")]
    Link { program: String, log: String },
}

impl ShaderError {
    pub fn log(&self) -> &str {
        match self {
            ShaderError::VertexCompile { log, .. }
            | ShaderError::FragmentCompile { log, .. }
            | ShaderError::Link { log, .. } => log,
        }
    }
}

/// One validated shader stage.
#[derive(Debug)]
pub struct CompiledStage {
    pub source: String,
    pub entry_point: String,
    pub module: Module,
}

/// A vertex and fragment stage whose interfaces agree.
#[derive(Debug)]
pub struct ShaderProgram {
    pub label: String,
    pub vertex: CompiledStage,
    pub fragment: CompiledStage,
}

/// Compile both stages, then link them.
///
/// A stage that fails to compile stops the build; linking is only attempted
/// once both stages are valid.
pub fn build_program(
    label: &str,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<ShaderProgram, ShaderError> {
    let vertex = compile(vertex_source).map_err(|log| ShaderError::VertexCompile {
        program: label.to_string(),
        log,
    })?;
    let fragment = compile(fragment_source).map_err(|log| ShaderError::FragmentCompile {
        program: label.to_string(),
        log,
    })?;

    let (vertex_entry, fragment_entry) =
        link(&vertex, &fragment).map_err(|log| ShaderError::Link {
            program: label.to_string(),
            log,
        })?;

    tracing::debug!(program = label, vertex = %vertex_entry, fragment = %fragment_entry, "linked shader program");

    Ok(ShaderProgram {
        label: label.to_string(),
        vertex: CompiledStage {
            source: vertex_source.to_string(),
            entry_point: vertex_entry,
            module: vertex,
        },
        fragment: CompiledStage {
            source: fragment_source.to_string(),
            entry_point: fragment_entry,
            module: fragment,
        },
    })
}

fn compile(source: &str) -> Result<Module, String> {
    let module = wgsl::parse_str(source).map_err(|e| e.emit_to_string(source))?;
    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| e.emit_to_string(source))?;
    Ok(module)
}

/// Resolve the entry points and check that every fragment input location is
/// written by the vertex stage with the same type.
fn link(vertex: &Module, fragment: &Module) -> Result<(String, String), String> {
    let vs = vertex
        .entry_points
        .iter()
        .find(|ep| ep.stage == ShaderStage::Vertex)
        .ok_or("vertex source has no @vertex entry point")?;
    let fs = fragment
        .entry_points
        .iter()
        .find(|ep| ep.stage == ShaderStage::Fragment)
        .ok_or("fragment source has no @fragment entry point")?;

    let mut outputs = BTreeMap::new();
    if let Some(result) = &vs.function.result {
        collect_locations(vertex, result.ty, result.binding.as_ref(), &mut outputs);
    }
    let mut inputs = BTreeMap::new();
    for arg in &fs.function.arguments {
        collect_locations(fragment, arg.ty, arg.binding.as_ref(), &mut inputs);
    }

    for (location, input) in &inputs {
        match outputs.get(location) {
            None => {
                return Err(format!(
                    "fragment input @location({location}) is not written by `{}`",
                    vs.name
                ));
            }
            Some(output) if output != input => {
                return Err(format!(
                    "@location({location}) type mismatch: vertex writes {output:?}, fragment reads {input:?}"
                ));
            }
            Some(_) => {}
        }
    }

    Ok((vs.name.clone(), fs.name.clone()))
}

fn collect_locations(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut BTreeMap<u32, TypeInner>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.insert(*location, module.types[ty].inner.clone());
        }
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaders;

    #[test]
    fn scene_programs_build() {
        let textured = build_program("textured", shaders::TEXTURED_VERTEX, shaders::TEXTURED_FRAGMENT).unwrap();
        assert_eq!(textured.vertex.entry_point, "vs_main");
        assert_eq!(textured.fragment.entry_point, "fs_main");
        build_program("lamp", shaders::LAMP_VERTEX, shaders::LAMP_FRAGMENT).unwrap();
    }

    #[test]
    fn broken_vertex_stage_reports_vertex_compile() {
        let err = build_program("bad", "@vertex fn vs_main( -> {", shaders::LAMP_FRAGMENT).unwrap_err();
        assert!(matches!(err, ShaderError::VertexCompile { ref program, .. } if program == "bad"));
        assert!(!err.log().is_empty());
    }

    #[test]
    fn broken_fragment_stage_reports_fragment_compile() {
        let fragment = "@fragment fn fs_main() -> @location(0) vec4<f32> { return undefined_value; }";
        let err = build_program("bad", shaders::LAMP_VERTEX, fragment).unwrap_err();
        assert!(matches!(err, ShaderError::FragmentCompile { .. }));
        assert!(err.to_string().contains("fragment shader failed to compile"));
    }

    #[test]
    fn unmatched_fragment_input_fails_to_link() {
        // The lamp vertex stage writes no locations.
        let err = build_program("mixed", shaders::LAMP_VERTEX, shaders::TEXTURED_FRAGMENT).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().contains("@location(0)"));
    }

    #[test]
    fn mismatched_location_type_fails_to_link() {
        let fragment = r#"
@fragment
fn fs_main(@location(0) uv: vec3<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(uv, 1.0);
}
"#;
        let err = build_program("mismatch", shaders::TEXTURED_VERTEX, fragment).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().contains("type mismatch"));
    }

    #[test]
    fn missing_entry_point_fails_to_link() {
        let fragment = "fn helper() -> f32 { return 1.0; }";
        let err = build_program("no_main", shaders::LAMP_VERTEX, fragment).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().contains("@fragment"));
    }
}
