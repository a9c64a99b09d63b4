#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Width(pub f32);
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Height(pub f32);
