pub mod customer;
pub mod filter;
pub mod invoice;
pub mod page;

pub use customer::{Address, Customer, CustomerStatus, CustomerType};
pub use filter::{
    AmountFilter, DateFilter, InvoiceFilters, MatchMode, SortDescriptor, SortDirection, SortField,
};
pub use invoice::{Invoice, InvoiceItem, PaymentMethod, PaymentStatus};
pub use page::Page;
