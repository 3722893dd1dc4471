use crate::model::{Format, Kind, Literal};

/// A positional argument: must appear, consumed in declared order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Required {
    kind: Kind,
    name: &'static str,
    label: &'static str,
    description: &'static str,
}

impl Required {
    /// The kind (type & converter).
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// The storage name in the result container.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The label shown as `<label>` in the help message.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// The help description.
    pub const fn description(&self) -> &'static str {
        self.description
    }
}

/// A flagged option: must be preceded by its flag token, otherwise the default stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optional {
    name: &'static str,
    default: Literal,
    flag: &'static str,
    label: &'static str,
    description: &'static str,
    format: Format,
}

impl Optional {
    /// The kind (type & converter), taken from the default.
    pub const fn kind(&self) -> Kind {
        self.default.kind()
    }

    /// The storage name in the result container.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared default.
    pub const fn default(&self) -> Literal {
        self.default
    }

    /// The flag token (ex: `--name`).
    pub const fn flag(&self) -> &'static str {
        self.flag
    }

    /// The label shown as `<label>` in the help message.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// The help description.
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// The help format of the default.
    pub const fn format(&self) -> Format {
        self.format
    }
}

/// A boolean switch: `true` when its flag token is present, `false` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boolean {
    name: &'static str,
    flag: &'static str,
    description: &'static str,
}

impl Boolean {
    /// The storage name in the result container.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The flag token (ex: `--verbose`).
    pub const fn flag(&self) -> &'static str {
        self.flag
    }

    /// The help description.
    pub const fn description(&self) -> &'static str {
        self.description
    }
}

/// The declaration of one argument, option, or switch.
///
/// Descriptors are built with `const fn`s, so a program's full declaration may be written as a `const` table.
///
/// ### Example
/// ```
/// # use declargs_builder as declargs;
/// use declargs::{Descriptor, Kind, Literal};
///
/// const DESCRIPTORS: &[Descriptor] = &[
///     Descriptor::required(Kind::Str, "input", "input", "The input file."),
///     Descriptor::optional("ratio", Literal::F64(0.5), "--ratio", "ratio", "Mix ratio.").precision(2),
///     Descriptor::boolean("verbose", "--verbose", "Talk more."),
/// ];
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Descriptor {
    /// See [`Required`].
    Required(Required),
    /// See [`Optional`].
    Optional(Optional),
    /// See [`Boolean`].
    Boolean(Boolean),
}

impl Descriptor {
    /// Declare a required positional argument.
    pub const fn required(
        kind: Kind,
        name: &'static str,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Descriptor::Required(Required {
            kind,
            name,
            label,
            description,
        })
    }

    /// Declare an optional flagged argument.
    /// The type is that of the `default`.
    pub const fn optional(
        name: &'static str,
        default: Literal,
        flag: &'static str,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Descriptor::Optional(Optional {
            name,
            default,
            flag,
            label,
            description,
            format: Format::Display,
        })
    }

    /// Declare a boolean switch.
    pub const fn boolean(name: &'static str, flag: &'static str, description: &'static str) -> Self {
        Descriptor::Boolean(Boolean {
            name,
            flag,
            description,
        })
    }

    /// Render an optional's default with `precision` significant digits (see [`Format::General`]).
    /// Has no effect on required arguments or boolean switches.
    pub const fn precision(self, precision: u8) -> Self {
        match self {
            Descriptor::Optional(optional) => Descriptor::Optional(Optional {
                format: Format::General { precision },
                ..optional
            }),
            other => other,
        }
    }

    /// The storage name in the result container.
    pub const fn name(&self) -> &'static str {
        match self {
            Descriptor::Required(required) => required.name,
            Descriptor::Optional(optional) => optional.name,
            Descriptor::Boolean(boolean) => boolean.name,
        }
    }
}
