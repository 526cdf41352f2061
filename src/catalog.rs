use crate::container::{Container, Dimension, VariableMeta};
use crate::error::{Error, Result};
use crate::project::{self, ArrayPayload, Attribute};

/// An open container session: enumerates dimensions and variables and reads their attributes and
/// payloads.
///
/// The catalog owns its container. The container is released when the catalog is dropped, which
/// also covers every early return on error, or explicitly through [`Catalog::close`].
pub struct Catalog<C: Container> {
    container: C,
}

#[cfg(feature = "netcdf")]
impl Catalog<crate::container::nc::NcContainer> {
    /// Open a NetCDF file.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Catalog::new(crate::container::nc::NcContainer::open(path)?))
    }
}

impl<C: Container> Catalog<C> {
    pub fn new(container: C) -> Catalog<C> {
        Catalog { container }
    }

    pub fn dimensions(&self) -> Result<Vec<Dimension>> {
        self.container.dimensions()
    }

    /// All variables in declaration order.
    ///
    /// Enumeration stops at the first index the container does not know.
    pub fn variables(&self) -> Result<Vec<VariableMeta>> {
        let mut vars = Vec::new();

        while let Some(v) = self.container.variable(vars.len())? {
            vars.push(v);
        }

        debug!("found {} variables", vars.len());

        Ok(vars)
    }

    pub fn find_variable(&self, name: &str) -> Result<VariableMeta> {
        self.container
            .variable_by_name(name)?
            .ok_or_else(|| Error::metadata("variable lookup", format!("no variable `{name}`")))
    }

    /// Dimensions of `var` in declared axis order.
    #[must_use]
    pub fn dimensions_of<'v>(&self, var: &'v VariableMeta) -> &'v [Dimension] {
        &var.dimensions
    }

    pub fn attributes(&self, var: &VariableMeta) -> Result<Vec<Attribute>> {
        project::read_attributes(&self.container, var)
    }

    pub fn read_array(&self, var: &VariableMeta) -> Result<ArrayPayload> {
        project::read_array(&self.container, var)
    }

    pub fn close(self) -> Result<()> {
        self.container.close()
    }
}
