/// Trait for types whose orientation can be flipped,
/// e.g. reversing the winding of a triangle mesh.
pub trait Invertible: Clone {
    fn invert(&mut self);
    fn inverse(&self) -> Self {
        let mut inv = self.clone();
        inv.invert();
        inv
    }
}
