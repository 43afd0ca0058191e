pub mod tabular_result_factory;
pub mod timestamp_factory;

pub use tabular_result_factory::TabularResultFactory;
pub use timestamp_factory::TimestampFactory;

#[cfg(test)]
mod tabular_result_factory_test;
#[cfg(test)]
mod timestamp_factory_test;
