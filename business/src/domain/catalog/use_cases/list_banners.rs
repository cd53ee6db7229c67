use crate::domain::banner::model::Banner;

pub trait ListBannersUseCase: Send + Sync {
    fn execute(&self) -> Vec<Banner>;
}
