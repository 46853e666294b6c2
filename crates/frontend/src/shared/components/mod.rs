pub mod breadcrumb;
