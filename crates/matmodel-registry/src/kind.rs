//! Declared material models.
//!
//! The table below is the single source of truth for names, UUIDs,
//! categories and documentation strings.
//!
//! Not every value has been cross-checked against the upstream material
//! library. These are local identifiers until verified:
//! - hyperelastic models: `ArrudaBoyce`, `MooneyRivlin`, `NeoHooke`,
//!   `OgdenN1`..`OgdenN3`, `YeohN1`..`YeohN3`
//! - `ArchitecturalRendering`
//! - every `RenderEngine` model (`RenderAppleseed` .. `RenderWB`)
//!
//! Material files written by other tools may carry different UUIDs for
//! these models.

use std::fmt;
use std::str::FromStr;

use matmodel_types::{MatModelError, MatModelResult, ModelCategory, ModelUuid};

macro_rules! declare_models {
    ($( $variant:ident, $konst:ident = $uuid:literal, $category:ident, $doc:literal; )*) => {
        /// UUID string constants, one per declared model.
        pub mod uuids {
            $(
                #[doc = $doc]
                pub const $konst: &str = $uuid;
            )*
        }

        /// A declared material model.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ModelKind {
            $(
                #[doc = $doc]
                $variant,
            )*
        }

        impl ModelKind {
            /// Every declared model, in declaration order.
            pub const ALL: &'static [ModelKind] = &[$(ModelKind::$variant,)*];

            /// Scripting attribute name (e.g. `"RenderCycles"`).
            pub fn name(self) -> &'static str {
                match self {
                    $(ModelKind::$variant => stringify!($variant),)*
                }
            }

            /// UUID in lowercase hyphenated form.
            pub fn uuid_str(self) -> &'static str {
                match self {
                    $(ModelKind::$variant => uuids::$konst,)*
                }
            }

            /// Name of the matching constant in [`uuids`].
            pub fn const_name(self) -> &'static str {
                match self {
                    $(ModelKind::$variant => stringify!($konst),)*
                }
            }

            /// Model family.
            pub fn category(self) -> ModelCategory {
                match self {
                    $(ModelKind::$variant => ModelCategory::$category,)*
                }
            }

            /// One-line documentation string exposed to bindings.
            pub fn doc(self) -> &'static str {
                match self {
                    $(ModelKind::$variant => $doc,)*
                }
            }
        }
    };
}

declare_models! {
    // Legacy
    Father, FATHER = "9cdda8b6-b606-4778-8f13-3934d8668e67", Legacy,
        "Parent material inheritance for legacy material cards.";
    MaterialStandard, MATERIAL_STANDARD = "1e2c0088-904a-4537-925f-64064c07d700", Legacy,
        "Standard designation and reference of a legacy material card.";

    // Mechanical
    ArrudaBoyce, ARRUDA_BOYCE = "e10d00de-c7de-4e59-bcdd-058c2ea19ec6", Mechanical,
        "Arruda-Boyce hyperelastic model.";
    Density, DENSITY = "454661e5-265b-4320-8e6f-fcf6223ac3af", Mechanical,
        "Mass density.";
    Hardness, HARDNESS = "3d1a6141-d032-4d82-8bb5-a8f339fff8ad", Mechanical,
        "Material hardness on a named scale.";
    IsotropicLinearElastic, ISOTROPIC_LINEAR_ELASTIC = "f6f9e48c-b116-4e82-ad7f-3659a9219c50", Mechanical,
        "Isotropic linear elastic model: Young's modulus, Poisson ratio, shear and bulk moduli.";
    LinearElastic, LINEAR_ELASTIC = "7b561d1d-fb9b-44f6-9da9-56a4f74d7536", Mechanical,
        "General anisotropic linear elastic model given by a stiffness matrix.";
    MooneyRivlin, MOONEY_RIVLIN = "beeed169-7770-4da0-ab67-c9172cf7d23d", Mechanical,
        "Mooney-Rivlin hyperelastic model.";
    NeoHooke, NEO_HOOKE = "569ebc58-ef29-434a-83be-555a0980d505", Mechanical,
        "Neo-Hookean hyperelastic model.";
    OgdenN1, OGDEN_N1 = "a2634a2c-412f-468d-9bec-74ae5d87a9c0", Mechanical,
        "First order Ogden hyperelastic model.";
    OgdenN2, OGDEN_N2 = "233540bb-7b13-4f49-ac12-126a5c82cedf", Mechanical,
        "Second order Ogden hyperelastic model.";
    OgdenN3, OGDEN_N3 = "a917d6b8-209f-429e-9972-fe4bbb97af3f", Mechanical,
        "Third order Ogden hyperelastic model.";
    OgdenYld2004p18, OGDEN_YLD2004P18 = "3ef9e427-cc25-43f7-817f-79ff0d49625f", Mechanical,
        "Ogden hyperelasticity combined with the Yld2004-18p anisotropic yield criterion.";
    OrthotropicLinearElastic, ORTHOTROPIC_LINEAR_ELASTIC = "b19ccc6b-a431-418e-91c2-0ac8c649d146", Mechanical,
        "Orthotropic linear elastic model with three principal directions.";
    YeohN1, YEOH_N1 = "cd13c492-21a9-4578-8191-deec003e4c01", Mechanical,
        "First order Yeoh hyperelastic model.";
    YeohN2, YEOH_N2 = "e14d9a57-e5c9-4732-bedc-2bdd56fa00e9", Mechanical,
        "Second order Yeoh hyperelastic model.";
    YeohN3, YEOH_N3 = "c176b97a-dc45-462b-856f-c95486f0aff4", Mechanical,
        "Third order Yeoh hyperelastic model.";

    // Physical domains
    Fluid, FLUID = "1ae66d8c-1ba1-4211-ad12-b9917573b202", Fluid,
        "Fluid properties: kinematic viscosity, dynamic viscosity, Prandtl number.";
    Thermal, THERMAL = "9959d007-a970-4ea7-bae4-3eb1b8b883c7", Thermal,
        "Thermal properties: conductivity, expansion, specific heat.";
    Electromagnetic, ELECTROMAGNETIC = "b2eb5f48-74b3-4193-9fbb-948674f427f3", Electromagnetic,
        "Electromagnetic properties: permittivity, permeability, conductivity.";
    Architectural, ARCHITECTURAL = "32439c3b-262f-4b7b-99a8-f7f44e5894c8", Architectural,
        "Architectural properties: execution instructions, fire resistance, sound transmission.";
    ArchitecturalRendering, ARCHITECTURAL_RENDERING = "b095c5e0-a7cd-4c2c-bea4-aa96dc741925", Architectural,
        "Simplified appearance used for architectural drawings and views.";
    Costs, COSTS = "881df808-8726-4c2e-be38-688bb6cce466", Costs,
        "Product URL, vendor and price information.";

    // Appearance
    BasicRendering, BASIC_RENDERING = "f006c7e4-35b7-43d5-bbf9-c5d572309e6e", Rendering,
        "Basic appearance: ambient, diffuse, emissive and specular colors, shininess, transparency.";
    TextureRendering, TEXTURE_RENDERING = "bbdcc65b-67ca-489c-bd5c-a36e33d1c160", Rendering,
        "Basic appearance extended with a texture image and scaling.";
    AdvancedRendering, ADVANCED_RENDERING = "c880f092-cdae-43d6-a24b-55e884aacbbf", Rendering,
        "Advanced appearance: fragment and vertex shaders.";
    VectorRendering, VECTOR_RENDERING = "fdf5a80e-de50-4157-b2e5-b6e5f88b680e", Rendering,
        "Vector appearance: section fill pattern, line color and view color.";

    // Render engine shaders
    RenderAppleseed, RENDER_APPLESEED = "42aba6d9-103a-4997-9381-342815e5e792", RenderEngine,
        "Shader parameters for the Appleseed renderer.";
    RenderCarpaint, RENDER_CARPAINT = "7e9352a6-caa0-4c3e-a680-02643479ba29", RenderEngine,
        "Car paint shader: base color, flake and clear coat.";
    RenderCycles, RENDER_CYCLES = "41656d79-a00f-4218-934c-bafa1e81d5d1", RenderEngine,
        "Shader parameters for the Cycles renderer.";
    RenderDiffuse, RENDER_DIFFUSE = "f3f1adda-0efc-47d0-bc07-dcce4e20906f", RenderEngine,
        "Plain diffuse shader.";
    RenderDisney, RENDER_DISNEY = "421bf427-f083-40de-a8b7-df14bfa7f8e6", RenderEngine,
        "Disney principled shader.";
    RenderEmission, RENDER_EMISSION = "7bd4e2fd-249d-468e-ad95-14288fb0db02", RenderEngine,
        "Light emitting shader.";
    RenderGlass, RENDER_GLASS = "6a2277d3-c0c9-4fe6-8389-83ab307562cd", RenderEngine,
        "Glass shader: color and index of refraction.";
    RenderLuxcore, RENDER_LUXCORE = "8b6f8a8a-c9c9-4409-ad43-66e6ca5a3e41", RenderEngine,
        "Shader parameters for the LuxCore renderer.";
    RenderLuxrender, RENDER_LUXRENDER = "52a69fef-4615-4f5b-9267-433cfe4f7894", RenderEngine,
        "Shader parameters for the LuxRender renderer.";
    RenderMixed, RENDER_MIXED = "a156969e-46af-41d2-b075-55158d18b7f6", RenderEngine,
        "Mix of diffuse and glass shaders.";
    RenderOspray, RENDER_OSPRAY = "51d16140-6d2a-45d7-a7a7-8660fc0b9607", RenderEngine,
        "Shader parameters for the OSPRay renderer.";
    RenderPbrt, RENDER_PBRT = "c1d38bd9-08dd-4993-9f9d-ac3cadd69968", RenderEngine,
        "Shader parameters for the pbrt renderer.";
    RenderPovray, RENDER_POVRAY = "d4094db9-cec4-4682-9ec0-7d561208b831", RenderEngine,
        "Shader parameters for the POV-Ray renderer.";
    RenderSubstancePBR, RENDER_SUBSTANCE_PBR = "be4f10af-8a27-4ae9-9222-57a2f2985abd", RenderEngine,
        "Substance physically based shader.";
    RenderTexture, RENDER_TEXTURE = "2fd260fa-5a1e-4184-b130-74e8f9842728", RenderEngine,
        "Image texture bindings for render engine shaders.";
    RenderWB, RENDER_WB = "024d4b2f-bdd4-44d1-b33e-5cba8c8cb278", RenderEngine,
        "Common parameters shared by all render engine shaders.";

    // Test
    TestMaterial, TEST_MATERIAL = "34d0583d-f999-49ba-99e6-aa40bd5c3a6b", Test,
        "Model exercising every property type. Test suites only.";
}

impl ModelKind {
    /// Finds a model by exact (case-sensitive) scripting name.
    pub fn from_name(name: &str) -> Option<ModelKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Parsed form of [`ModelKind::uuid_str`].
    pub fn uuid(self) -> MatModelResult<ModelUuid> {
        ModelUuid::parse(self.uuid_str())
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = MatModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| MatModelError::unknown(s))
    }
}
